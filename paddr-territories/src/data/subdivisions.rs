//! ISO 3166-2 subdivision codes, names and categories.
//!
//! Full list of currently assigned ISO 3166-2 entries (5127), sorted by code.
//! The parent country of each entry is the alpha-2 prefix of its code.

#[rustfmt::skip]
pub(crate) const SUBDIVISIONS: &[(&str, &str, &str)] = &[
    ("AD-02", "Canillo", "Parish"),
    ("AD-03", "Encamp", "Parish"),
    ("AD-04", "La Massana", "Parish"),
    ("AD-05", "Ordino", "Parish"),
    ("AD-06", "Sant Julià de Lòria", "Parish"),
    ("AD-07", "Andorra la Vella", "Parish"),
    ("AD-08", "Escaldes-Engordany", "Parish"),
    ("AE-AJ", "‘Ajmān", "Emirate"),
    ("AE-AZ", "Abū Z̧aby", "Emirate"),
    ("AE-DU", "Dubayy", "Emirate"),
    ("AE-FU", "Al Fujayrah", "Emirate"),
    ("AE-RK", "Ra’s al Khaymah", "Emirate"),
    ("AE-SH", "Ash Shāriqah", "Emirate"),
    ("AE-UQ", "Umm al Qaywayn", "Emirate"),
    ("AF-BAL", "Balkh", "Province"),
    ("AF-BAM", "Bāmyān", "Province"),
    ("AF-BDG", "Bādghīs", "Province"),
    ("AF-BDS", "Badakhshān", "Province"),
    ("AF-BGL", "Baghlān", "Province"),
    ("AF-DAY", "Dāykundī", "Province"),
    ("AF-FRA", "Farāh", "Province"),
    ("AF-FYB", "Fāryāb", "Province"),
    ("AF-GHA", "Ghaznī", "Province"),
    ("AF-GHO", "Ghōr", "Province"),
    ("AF-HEL", "Helmand", "Province"),
    ("AF-HER", "Herāt", "Province"),
    ("AF-JOW", "Jowzjān", "Province"),
    ("AF-KAB", "Kābul", "Province"),
    ("AF-KAN", "Kandahār", "Province"),
    ("AF-KAP", "Kāpīsā", "Province"),
    ("AF-KDZ", "Kunduz", "Province"),
    ("AF-KHO", "Khōst", "Province"),
    ("AF-KNR", "Kunaṟ", "Province"),
    ("AF-LAG", "Laghmān", "Province"),
    ("AF-LOG", "Lōgar", "Province"),
    ("AF-NAN", "Nangarhār", "Province"),
    ("AF-NIM", "Nīmrōz", "Province"),
    ("AF-NUR", "Nūristān", "Province"),
    ("AF-PAN", "Panjshayr", "Province"),
    ("AF-PAR", "Parwān", "Province"),
    ("AF-PIA", "Paktiyā", "Province"),
    ("AF-PKA", "Paktīkā", "Province"),
    ("AF-SAM", "Samangān", "Province"),
    ("AF-SAR", "Sar-e Pul", "Province"),
    ("AF-TAK", "Takhār", "Province"),
    ("AF-URU", "Uruzgān", "Province"),
    ("AF-WAR", "Wardak", "Province"),
    ("AF-ZAB", "Zābul", "Province"),
    ("AG-03", "Saint George", "Parish"),
    ("AG-04", "Saint John", "Parish"),
    ("AG-05", "Saint Mary", "Parish"),
    ("AG-06", "Saint Paul", "Parish"),
    ("AG-07", "Saint Peter", "Parish"),
    ("AG-08", "Saint Philip", "Parish"),
    ("AG-10", "Barbuda", "Dependency"),
    ("AG-11", "Redonda", "Dependency"),
    ("AL-01", "Berat", "County"),
    ("AL-02", "Durrës", "County"),
    ("AL-03", "Elbasan", "County"),
    ("AL-04", "Fier", "County"),
    ("AL-05", "Gjirokastër", "County"),
    ("AL-06", "Korçë", "County"),
    ("AL-07", "Kukës", "County"),
    ("AL-08", "Lezhë", "County"),
    ("AL-09", "Dibër", "County"),
    ("AL-10", "Shkodër", "County"),
    ("AL-11", "Tiranë", "County"),
    ("AL-12", "Vlorë", "County"),
    ("AM-AG", "Aragac̣otn", "Region"),
    ("AM-AR", "Ararat", "Region"),
    ("AM-AV", "Armavir", "Region"),
    ("AM-ER", "Erevan", "City"),
    ("AM-GR", "Geġark'unik'", "Region"),
    ("AM-KT", "Kotayk'", "Region"),
    ("AM-LO", "Loṙi", "Region"),
    ("AM-SH", "Širak", "Region"),
    ("AM-SU", "Syunik'", "Region"),
    ("AM-TV", "Tavuš", "Region"),
    ("AM-VD", "Vayoć Jor", "Region"),
    ("AO-BGO", "Bengo", "Province"),
    ("AO-BGU", "Benguela", "Province"),
    ("AO-BIE", "Bié", "Province"),
    ("AO-CAB", "Cabinda", "Province"),
    ("AO-CCU", "Cuando Cubango", "Province"),
    ("AO-CNN", "Cunene", "Province"),
    ("AO-CNO", "Cuanza-Norte", "Province"),
    ("AO-CUS", "Cuanza-Sul", "Province"),
    ("AO-HUA", "Huambo", "Province"),
    ("AO-HUI", "Huíla", "Province"),
    ("AO-LNO", "Lunda-Norte", "Province"),
    ("AO-LSU", "Lunda-Sul", "Province"),
    ("AO-LUA", "Luanda", "Province"),
    ("AO-MAL", "Malange", "Province"),
    ("AO-MOX", "Moxico", "Province"),
    ("AO-NAM", "Namibe", "Province"),
    ("AO-UIG", "Uíge", "Province"),
    ("AO-ZAI", "Zaire", "Province"),
    ("AR-A", "Salta", "Province"),
    ("AR-B", "Buenos Aires", "Province"),
    ("AR-C", "Ciudad Autónoma de Buenos Aires", "City"),
    ("AR-D", "San Luis", "Province"),
    ("AR-E", "Entre Ríos", "Province"),
    ("AR-F", "La Rioja", "Province"),
    ("AR-G", "Santiago del Estero", "Province"),
    ("AR-H", "Chaco", "Province"),
    ("AR-J", "San Juan", "Province"),
    ("AR-K", "Catamarca", "Province"),
    ("AR-L", "La Pampa", "Province"),
    ("AR-M", "Mendoza", "Province"),
    ("AR-N", "Misiones", "Province"),
    ("AR-P", "Formosa", "Province"),
    ("AR-Q", "Neuquén", "Province"),
    ("AR-R", "Río Negro", "Province"),
    ("AR-S", "Santa Fe", "Province"),
    ("AR-T", "Tucumán", "Province"),
    ("AR-U", "Chubut", "Province"),
    ("AR-V", "Tierra del Fuego", "Province"),
    ("AR-W", "Corrientes", "Province"),
    ("AR-X", "Córdoba", "Province"),
    ("AR-Y", "Jujuy", "Province"),
    ("AR-Z", "Santa Cruz", "Province"),
    ("AT-1", "Burgenland", "State"),
    ("AT-2", "Kärnten", "State"),
    ("AT-3", "Niederösterreich", "State"),
    ("AT-4", "Oberösterreich", "State"),
    ("AT-5", "Salzburg", "State"),
    ("AT-6", "Steiermark", "State"),
    ("AT-7", "Tirol", "State"),
    ("AT-8", "Vorarlberg", "State"),
    ("AT-9", "Wien", "State"),
    ("AU-ACT", "Australian Capital Territory", "Territory"),
    ("AU-NSW", "New South Wales", "State"),
    ("AU-NT", "Northern Territory", "Territory"),
    ("AU-QLD", "Queensland", "State"),
    ("AU-SA", "South Australia", "State"),
    ("AU-TAS", "Tasmania", "State"),
    ("AU-VIC", "Victoria", "State"),
    ("AU-WA", "Western Australia", "State"),
    ("AZ-ABS", "Abşeron", "Rayon"),
    ("AZ-AGA", "Ağstafa", "Rayon"),
    ("AZ-AGC", "Ağcabədi", "Rayon"),
    ("AZ-AGM", "Ağdam", "Rayon"),
    ("AZ-AGS", "Ağdaş", "Rayon"),
    ("AZ-AGU", "Ağsu", "Rayon"),
    ("AZ-AST", "Astara", "Rayon"),
    ("AZ-BA", "Bakı", "Municipality"),
    ("AZ-BAB", "Babək", "Rayon"),
    ("AZ-BAL", "Balakən", "Rayon"),
    ("AZ-BAR", "Bərdə", "Rayon"),
    ("AZ-BEY", "Beyləqan", "Rayon"),
    ("AZ-BIL", "Biləsuvar", "Rayon"),
    ("AZ-CAB", "Cəbrayıl", "Rayon"),
    ("AZ-CAL", "Cəlilabad", "Rayon"),
    ("AZ-CUL", "Culfa", "Rayon"),
    ("AZ-DAS", "Daşkəsən", "Rayon"),
    ("AZ-FUZ", "Füzuli", "Rayon"),
    ("AZ-GA", "Gəncə", "Municipality"),
    ("AZ-GAD", "Gədəbəy", "Rayon"),
    ("AZ-GOR", "Goranboy", "Rayon"),
    ("AZ-GOY", "Göyçay", "Rayon"),
    ("AZ-GYG", "Göygöl", "Rayon"),
    ("AZ-HAC", "Hacıqabul", "Rayon"),
    ("AZ-IMI", "İmişli", "Rayon"),
    ("AZ-ISM", "İsmayıllı", "Rayon"),
    ("AZ-KAL", "Kəlbəcər", "Rayon"),
    ("AZ-KAN", "Kǝngǝrli", "Rayon"),
    ("AZ-KUR", "Kürdəmir", "Rayon"),
    ("AZ-LA", "Lənkəran", "Municipality"),
    ("AZ-LAC", "Laçın", "Rayon"),
    ("AZ-LAN", "Lənkəran", "Rayon"),
    ("AZ-LER", "Lerik", "Rayon"),
    ("AZ-MAS", "Masallı", "Rayon"),
    ("AZ-MI", "Mingəçevir", "Municipality"),
    ("AZ-NA", "Naftalan", "Municipality"),
    ("AZ-NEF", "Neftçala", "Rayon"),
    ("AZ-NV", "Naxçıvan", "Municipality"),
    ("AZ-NX", "Naxçıvan", "Autonomous republic"),
    ("AZ-OGU", "Oğuz", "Rayon"),
    ("AZ-ORD", "Ordubad", "Rayon"),
    ("AZ-QAB", "Qəbələ", "Rayon"),
    ("AZ-QAX", "Qax", "Rayon"),
    ("AZ-QAZ", "Qazax", "Rayon"),
    ("AZ-QBA", "Quba", "Rayon"),
    ("AZ-QBI", "Qubadlı", "Rayon"),
    ("AZ-QOB", "Qobustan", "Rayon"),
    ("AZ-QUS", "Qusar", "Rayon"),
    ("AZ-SA", "Şəki", "Municipality"),
    ("AZ-SAB", "Sabirabad", "Rayon"),
    ("AZ-SAD", "Sədərək", "Rayon"),
    ("AZ-SAH", "Şahbuz", "Rayon"),
    ("AZ-SAK", "Şəki", "Rayon"),
    ("AZ-SAL", "Salyan", "Rayon"),
    ("AZ-SAR", "Şərur", "Rayon"),
    ("AZ-SAT", "Saatlı", "Rayon"),
    ("AZ-SBN", "Şabran", "Rayon"),
    ("AZ-SIY", "Siyəzən", "Rayon"),
    ("AZ-SKR", "Şəmkir", "Rayon"),
    ("AZ-SM", "Sumqayıt", "Municipality"),
    ("AZ-SMI", "Şamaxı", "Rayon"),
    ("AZ-SMX", "Samux", "Rayon"),
    ("AZ-SR", "Şirvan", "Municipality"),
    ("AZ-SUS", "Şuşa", "Rayon"),
    ("AZ-TAR", "Tərtər", "Rayon"),
    ("AZ-TOV", "Tovuz", "Rayon"),
    ("AZ-UCA", "Ucar", "Rayon"),
    ("AZ-XA", "Xankəndi", "Municipality"),
    ("AZ-XAC", "Xaçmaz", "Rayon"),
    ("AZ-XCI", "Xocalı", "Rayon"),
    ("AZ-XIZ", "Xızı", "Rayon"),
    ("AZ-XVD", "Xocavənd", "Rayon"),
    ("AZ-YAR", "Yardımlı", "Rayon"),
    ("AZ-YE", "Yevlax", "Municipality"),
    ("AZ-YEV", "Yevlax", "Rayon"),
    ("AZ-ZAN", "Zəngilan", "Rayon"),
    ("AZ-ZAQ", "Zaqatala", "Rayon"),
    ("AZ-ZAR", "Zərdab", "Rayon"),
    ("BA-BIH", "Federacija Bosne i Hercegovine", "Entity"),
    ("BA-BRC", "Brčko distrikt", "District with special status"),
    ("BA-SRP", "Republika Srpska", "Entity"),
    ("BB-01", "Christ Church", "Parish"),
    ("BB-02", "Saint Andrew", "Parish"),
    ("BB-03", "Saint George", "Parish"),
    ("BB-04", "Saint James", "Parish"),
    ("BB-05", "Saint John", "Parish"),
    ("BB-06", "Saint Joseph", "Parish"),
    ("BB-07", "Saint Lucy", "Parish"),
    ("BB-08", "Saint Michael", "Parish"),
    ("BB-09", "Saint Peter", "Parish"),
    ("BB-10", "Saint Philip", "Parish"),
    ("BB-11", "Saint Thomas", "Parish"),
    ("BD-01", "Bandarban", "District"),
    ("BD-02", "Barguna", "District"),
    ("BD-03", "Bogura", "District"),
    ("BD-04", "Brahmanbaria", "District"),
    ("BD-05", "Bagerhat", "District"),
    ("BD-06", "Barishal", "District"),
    ("BD-07", "Bhola", "District"),
    ("BD-08", "Cumilla", "District"),
    ("BD-09", "Chandpur", "District"),
    ("BD-10", "Chattogram", "District"),
    ("BD-11", "Cox's Bazar", "District"),
    ("BD-12", "Chuadanga", "District"),
    ("BD-13", "Dhaka", "District"),
    ("BD-14", "Dinajpur", "District"),
    ("BD-15", "Faridpur", "District"),
    ("BD-16", "Feni", "District"),
    ("BD-17", "Gopalganj", "District"),
    ("BD-18", "Gazipur", "District"),
    ("BD-19", "Gaibandha", "District"),
    ("BD-20", "Habiganj", "District"),
    ("BD-21", "Jamalpur", "District"),
    ("BD-22", "Jashore", "District"),
    ("BD-23", "Jhenaidah", "District"),
    ("BD-24", "Joypurhat", "District"),
    ("BD-25", "Jhalakathi", "District"),
    ("BD-26", "Kishoreganj", "District"),
    ("BD-27", "Khulna", "District"),
    ("BD-28", "Kurigram", "District"),
    ("BD-29", "Khagrachhari", "District"),
    ("BD-30", "Kushtia", "District"),
    ("BD-31", "Lakshmipur", "District"),
    ("BD-32", "Lalmonirhat", "District"),
    ("BD-33", "Manikganj", "District"),
    ("BD-34", "Mymensingh", "District"),
    ("BD-35", "Munshiganj", "District"),
    ("BD-36", "Madaripur", "District"),
    ("BD-37", "Magura", "District"),
    ("BD-38", "Moulvibazar", "District"),
    ("BD-39", "Meherpur", "District"),
    ("BD-40", "Narayanganj", "District"),
    ("BD-41", "Netrakona", "District"),
    ("BD-42", "Narsingdi", "District"),
    ("BD-43", "Narail", "District"),
    ("BD-44", "Natore", "District"),
    ("BD-45", "Chapai Nawabganj", "District"),
    ("BD-46", "Nilphamari", "District"),
    ("BD-47", "Noakhali", "District"),
    ("BD-48", "Naogaon", "District"),
    ("BD-49", "Pabna", "District"),
    ("BD-50", "Pirojpur", "District"),
    ("BD-51", "Patuakhali", "District"),
    ("BD-52", "Panchagarh", "District"),
    ("BD-53", "Rajbari", "District"),
    ("BD-54", "Rajshahi", "District"),
    ("BD-55", "Rangpur", "District"),
    ("BD-56", "Rangamati", "District"),
    ("BD-57", "Sherpur", "District"),
    ("BD-58", "Satkhira", "District"),
    ("BD-59", "Sirajganj", "District"),
    ("BD-60", "Sylhet", "District"),
    ("BD-61", "Sunamganj", "District"),
    ("BD-62", "Shariatpur", "District"),
    ("BD-63", "Tangail", "District"),
    ("BD-64", "Thakurgaon", "District"),
    ("BD-A", "Barishal", "Division"),
    ("BD-B", "Chattogram", "Division"),
    ("BD-C", "Dhaka", "Division"),
    ("BD-D", "Khulna", "Division"),
    ("BD-E", "Rajshahi", "Division"),
    ("BD-F", "Rangpur", "Division"),
    ("BD-G", "Sylhet", "Division"),
    ("BD-H", "Mymensingh", "Division"),
    ("BE-BRU", "Brussels Hoofdstedelijk Gewest", "Region"),
    ("BE-VAN", "Antwerpen", "Province"),
    ("BE-VBR", "Vlaams-Brabant", "Province"),
    ("BE-VLG", "Vlaams Gewest", "Region"),
    ("BE-VLI", "Limburg", "Province"),
    ("BE-VOV", "Oost-Vlaanderen", "Province"),
    ("BE-VWV", "West-Vlaanderen", "Province"),
    ("BE-WAL", "wallonne, Région", "Region"),
    ("BE-WBR", "Brabant wallon", "Province"),
    ("BE-WHT", "Hainaut", "Province"),
    ("BE-WLG", "Liège", "Province"),
    ("BE-WLX", "Luxembourg", "Province"),
    ("BE-WNA", "Namur", "Province"),
    ("BF-01", "Boucle du Mouhoun", "Region"),
    ("BF-02", "Cascades", "Region"),
    ("BF-03", "Centre", "Region"),
    ("BF-04", "Centre-Est", "Region"),
    ("BF-05", "Centre-Nord", "Region"),
    ("BF-06", "Centre-Ouest", "Region"),
    ("BF-07", "Centre-Sud", "Region"),
    ("BF-08", "Est", "Region"),
    ("BF-09", "Hauts-Bassins", "Region"),
    ("BF-10", "Nord", "Region"),
    ("BF-11", "Plateau-Central", "Region"),
    ("BF-12", "Sahel", "Region"),
    ("BF-13", "Sud-Ouest", "Region"),
    ("BF-BAL", "Balé", "Province"),
    ("BF-BAM", "Bam", "Province"),
    ("BF-BAN", "Banwa", "Province"),
    ("BF-BAZ", "Bazèga", "Province"),
    ("BF-BGR", "Bougouriba", "Province"),
    ("BF-BLG", "Boulgou", "Province"),
    ("BF-BLK", "Boulkiemdé", "Province"),
    ("BF-COM", "Comoé", "Province"),
    ("BF-GAN", "Ganzourgou", "Province"),
    ("BF-GNA", "Gnagna", "Province"),
    ("BF-GOU", "Gourma", "Province"),
    ("BF-HOU", "Houet", "Province"),
    ("BF-IOB", "Ioba", "Province"),
    ("BF-KAD", "Kadiogo", "Province"),
    ("BF-KEN", "Kénédougou", "Province"),
    ("BF-KMD", "Komondjari", "Province"),
    ("BF-KMP", "Kompienga", "Province"),
    ("BF-KOP", "Koulpélogo", "Province"),
    ("BF-KOS", "Kossi", "Province"),
    ("BF-KOT", "Kouritenga", "Province"),
    ("BF-KOW", "Kourwéogo", "Province"),
    ("BF-LER", "Léraba", "Province"),
    ("BF-LOR", "Loroum", "Province"),
    ("BF-MOU", "Mouhoun", "Province"),
    ("BF-NAM", "Namentenga", "Province"),
    ("BF-NAO", "Nahouri", "Province"),
    ("BF-NAY", "Nayala", "Province"),
    ("BF-NOU", "Noumbiel", "Province"),
    ("BF-OUB", "Oubritenga", "Province"),
    ("BF-OUD", "Oudalan", "Province"),
    ("BF-PAS", "Passoré", "Province"),
    ("BF-PON", "Poni", "Province"),
    ("BF-SEN", "Séno", "Province"),
    ("BF-SIS", "Sissili", "Province"),
    ("BF-SMT", "Sanmatenga", "Province"),
    ("BF-SNG", "Sanguié", "Province"),
    ("BF-SOM", "Soum", "Province"),
    ("BF-SOR", "Sourou", "Province"),
    ("BF-TAP", "Tapoa", "Province"),
    ("BF-TUI", "Tuy", "Province"),
    ("BF-YAG", "Yagha", "Province"),
    ("BF-YAT", "Yatenga", "Province"),
    ("BF-ZIR", "Ziro", "Province"),
    ("BF-ZON", "Zondoma", "Province"),
    ("BF-ZOU", "Zoundwéogo", "Province"),
    ("BG-01", "Blagoevgrad", "District"),
    ("BG-02", "Burgas", "District"),
    ("BG-03", "Varna", "District"),
    ("BG-04", "Veliko Tarnovo", "District"),
    ("BG-05", "Vidin", "District"),
    ("BG-06", "Vratsa", "District"),
    ("BG-07", "Gabrovo", "District"),
    ("BG-08", "Dobrich", "District"),
    ("BG-09", "Kardzhali", "District"),
    ("BG-10", "Kyustendil", "District"),
    ("BG-11", "Lovech", "District"),
    ("BG-12", "Montana", "District"),
    ("BG-13", "Pazardzhik", "District"),
    ("BG-14", "Pernik", "District"),
    ("BG-15", "Pleven", "District"),
    ("BG-16", "Plovdiv", "District"),
    ("BG-17", "Razgrad", "District"),
    ("BG-18", "Ruse", "District"),
    ("BG-19", "Silistra", "District"),
    ("BG-20", "Sliven", "District"),
    ("BG-21", "Smolyan", "District"),
    ("BG-22", "Sofia (stolitsa)", "District"),
    ("BG-23", "Sofia", "District"),
    ("BG-24", "Stara Zagora", "District"),
    ("BG-25", "Targovishte", "District"),
    ("BG-26", "Haskovo", "District"),
    ("BG-27", "Shumen", "District"),
    ("BG-28", "Yambol", "District"),
    ("BH-13", "Al ‘Āşimah", "Governorate"),
    ("BH-14", "Al Janūbīyah", "Governorate"),
    ("BH-15", "Al Muḩarraq", "Governorate"),
    ("BH-17", "Ash Shamālīyah", "Governorate"),
    ("BI-BB", "Bubanza", "Province"),
    ("BI-BL", "Bujumbura Rural", "Province"),
    ("BI-BM", "Bujumbura Mairie", "Province"),
    ("BI-BR", "Bururi", "Province"),
    ("BI-CA", "Cankuzo", "Province"),
    ("BI-CI", "Cibitoke", "Province"),
    ("BI-GI", "Gitega", "Province"),
    ("BI-KI", "Kirundo", "Province"),
    ("BI-KR", "Karuzi", "Province"),
    ("BI-KY", "Kayanza", "Province"),
    ("BI-MA", "Makamba", "Province"),
    ("BI-MU", "Muramvya", "Province"),
    ("BI-MW", "Mwaro", "Province"),
    ("BI-MY", "Muyinga", "Province"),
    ("BI-NG", "Ngozi", "Province"),
    ("BI-RM", "Rumonge", "Province"),
    ("BI-RT", "Rutana", "Province"),
    ("BI-RY", "Ruyigi", "Province"),
    ("BJ-AK", "Atacora", "Department"),
    ("BJ-AL", "Alibori", "Department"),
    ("BJ-AQ", "Atlantique", "Department"),
    ("BJ-BO", "Borgou", "Department"),
    ("BJ-CO", "Collines", "Department"),
    ("BJ-DO", "Donga", "Department"),
    ("BJ-KO", "Couffo", "Department"),
    ("BJ-LI", "Littoral", "Department"),
    ("BJ-MO", "Mono", "Department"),
    ("BJ-OU", "Ouémé", "Department"),
    ("BJ-PL", "Plateau", "Department"),
    ("BJ-ZO", "Zou", "Department"),
    ("BN-BE", "Belait", "District"),
    ("BN-BM", "Brunei-Muara", "District"),
    ("BN-TE", "Temburong", "District"),
    ("BN-TU", "Tutong", "District"),
    ("BO-B", "El Beni", "Department"),
    ("BO-C", "Cochabamba", "Department"),
    ("BO-H", "Chuquisaca", "Department"),
    ("BO-L", "La Paz", "Department"),
    ("BO-N", "Pando", "Department"),
    ("BO-O", "Oruro", "Department"),
    ("BO-P", "Potosí", "Department"),
    ("BO-S", "Santa Cruz", "Department"),
    ("BO-T", "Tarija", "Department"),
    ("BQ-BO", "Bonaire", "Special municipality"),
    ("BQ-SA", "Saba", "Special municipality"),
    ("BQ-SE", "Sint Eustatius", "Special municipality"),
    ("BR-AC", "Acre", "State"),
    ("BR-AL", "Alagoas", "State"),
    ("BR-AM", "Amazonas", "State"),
    ("BR-AP", "Amapá", "State"),
    ("BR-BA", "Bahia", "State"),
    ("BR-CE", "Ceará", "State"),
    ("BR-DF", "Distrito Federal", "Federal district"),
    ("BR-ES", "Espírito Santo", "State"),
    ("BR-GO", "Goiás", "State"),
    ("BR-MA", "Maranhão", "State"),
    ("BR-MG", "Minas Gerais", "State"),
    ("BR-MS", "Mato Grosso do Sul", "State"),
    ("BR-MT", "Mato Grosso", "State"),
    ("BR-PA", "Pará", "State"),
    ("BR-PB", "Paraíba", "State"),
    ("BR-PE", "Pernambuco", "State"),
    ("BR-PI", "Piauí", "State"),
    ("BR-PR", "Paraná", "State"),
    ("BR-RJ", "Rio de Janeiro", "State"),
    ("BR-RN", "Rio Grande do Norte", "State"),
    ("BR-RO", "Rondônia", "State"),
    ("BR-RR", "Roraima", "State"),
    ("BR-RS", "Rio Grande do Sul", "State"),
    ("BR-SC", "Santa Catarina", "State"),
    ("BR-SE", "Sergipe", "State"),
    ("BR-SP", "São Paulo", "State"),
    ("BR-TO", "Tocantins", "State"),
    ("BS-AK", "Acklins", "District"),
    ("BS-BI", "Bimini", "District"),
    ("BS-BP", "Black Point", "District"),
    ("BS-BY", "Berry Islands", "District"),
    ("BS-CE", "Central Eleuthera", "District"),
    ("BS-CI", "Cat Island", "District"),
    ("BS-CK", "Crooked Island and Long Cay", "District"),
    ("BS-CO", "Central Abaco", "District"),
    ("BS-CS", "Central Andros", "District"),
    ("BS-EG", "East Grand Bahama", "District"),
    ("BS-EX", "Exuma", "District"),
    ("BS-FP", "City of Freeport", "District"),
    ("BS-GC", "Grand Cay", "District"),
    ("BS-HI", "Harbour Island", "District"),
    ("BS-HT", "Hope Town", "District"),
    ("BS-IN", "Inagua", "District"),
    ("BS-LI", "Long Island", "District"),
    ("BS-MC", "Mangrove Cay", "District"),
    ("BS-MG", "Mayaguana", "District"),
    ("BS-MI", "Moore's Island", "District"),
    ("BS-NE", "North Eleuthera", "District"),
    ("BS-NO", "North Abaco", "District"),
    ("BS-NP", "New Providence", "Island"),
    ("BS-NS", "North Andros", "District"),
    ("BS-RC", "Rum Cay", "District"),
    ("BS-RI", "Ragged Island", "District"),
    ("BS-SA", "South Andros", "District"),
    ("BS-SE", "South Eleuthera", "District"),
    ("BS-SO", "South Abaco", "District"),
    ("BS-SS", "San Salvador", "District"),
    ("BS-SW", "Spanish Wells", "District"),
    ("BS-WG", "West Grand Bahama", "District"),
    ("BT-11", "Paro", "District"),
    ("BT-12", "Chhukha", "District"),
    ("BT-13", "Haa", "District"),
    ("BT-14", "Samtse", "District"),
    ("BT-15", "Thimphu", "District"),
    ("BT-21", "Tsirang", "District"),
    ("BT-22", "Dagana", "District"),
    ("BT-23", "Punakha", "District"),
    ("BT-24", "Wangdue Phodrang", "District"),
    ("BT-31", "Sarpang", "District"),
    ("BT-32", "Trongsa", "District"),
    ("BT-33", "Bumthang", "District"),
    ("BT-34", "Zhemgang", "District"),
    ("BT-41", "Trashigang", "District"),
    ("BT-42", "Monggar", "District"),
    ("BT-43", "Pema Gatshel", "District"),
    ("BT-44", "Lhuentse", "District"),
    ("BT-45", "Samdrup Jongkhar", "District"),
    ("BT-GA", "Gasa", "District"),
    ("BT-TY", "Trashi Yangtse", "District"),
    ("BW-CE", "Central", "District"),
    ("BW-CH", "Chobe", "District"),
    ("BW-FR", "Francistown", "City"),
    ("BW-GA", "Gaborone", "City"),
    ("BW-GH", "Ghanzi", "District"),
    ("BW-JW", "Jwaneng", "Town"),
    ("BW-KG", "Kgalagadi", "District"),
    ("BW-KL", "Kgatleng", "District"),
    ("BW-KW", "Kweneng", "District"),
    ("BW-LO", "Lobatse", "Town"),
    ("BW-NE", "North East", "District"),
    ("BW-NW", "North West", "District"),
    ("BW-SE", "South East", "District"),
    ("BW-SO", "Southern", "District"),
    ("BW-SP", "Selibe Phikwe", "Town"),
    ("BW-ST", "Sowa Town", "Town"),
    ("BY-BR", "Bresckaja voblasć", "Oblast"),
    ("BY-HM", "Gorod Minsk", "City"),
    ("BY-HO", "Gomel'skaja oblast'", "Oblast"),
    ("BY-HR", "Grodnenskaja oblast'", "Oblast"),
    ("BY-MA", "Mahilioŭskaja voblasć", "Oblast"),
    ("BY-MI", "Minskaja oblast'", "Oblast"),
    ("BY-VI", "Viciebskaja voblasć", "Oblast"),
    ("BZ-BZ", "Belize", "District"),
    ("BZ-CY", "Cayo", "District"),
    ("BZ-CZL", "Corozal", "District"),
    ("BZ-OW", "Orange Walk", "District"),
    ("BZ-SC", "Stann Creek", "District"),
    ("BZ-TOL", "Toledo", "District"),
    ("CA-AB", "Alberta", "Province"),
    ("CA-BC", "British Columbia", "Province"),
    ("CA-MB", "Manitoba", "Province"),
    ("CA-NB", "New Brunswick", "Province"),
    ("CA-NL", "Newfoundland and Labrador", "Province"),
    ("CA-NS", "Nova Scotia", "Province"),
    ("CA-NT", "Northwest Territories", "Territory"),
    ("CA-NU", "Nunavut", "Territory"),
    ("CA-ON", "Ontario", "Province"),
    ("CA-PE", "Prince Edward Island", "Province"),
    ("CA-QC", "Quebec", "Province"),
    ("CA-SK", "Saskatchewan", "Province"),
    ("CA-YT", "Yukon", "Territory"),
    ("CD-BC", "Kongo Central", "Province"),
    ("CD-BU", "Bas-Uélé", "Province"),
    ("CD-EQ", "Équateur", "Province"),
    ("CD-HK", "Haut-Katanga", "Province"),
    ("CD-HL", "Haut-Lomami", "Province"),
    ("CD-HU", "Haut-Uélé", "Province"),
    ("CD-IT", "Ituri", "Province"),
    ("CD-KC", "Kasaï Central", "Province"),
    ("CD-KE", "Kasaï Oriental", "Province"),
    ("CD-KG", "Kwango", "Province"),
    ("CD-KL", "Kwilu", "Province"),
    ("CD-KN", "Kinshasa", "City"),
    ("CD-KS", "Kasaï", "Province"),
    ("CD-LO", "Lomami", "Province"),
    ("CD-LU", "Lualaba", "Province"),
    ("CD-MA", "Maniema", "Province"),
    ("CD-MN", "Mai-Ndombe", "Province"),
    ("CD-MO", "Mongala", "Province"),
    ("CD-NK", "Nord-Kivu", "Province"),
    ("CD-NU", "Nord-Ubangi", "Province"),
    ("CD-SA", "Sankuru", "Province"),
    ("CD-SK", "Sud-Kivu", "Province"),
    ("CD-SU", "Sud-Ubangi", "Province"),
    ("CD-TA", "Tanganyika", "Province"),
    ("CD-TO", "Tshopo", "Province"),
    ("CD-TU", "Tshuapa", "Province"),
    ("CF-AC", "Ouham", "Prefecture"),
    ("CF-BB", "Bamingui-Bangoran", "Prefecture"),
    ("CF-BGF", "Bangui", "Commune"),
    ("CF-BK", "Basse-Kotto", "Prefecture"),
    ("CF-HK", "Haute-Kotto", "Prefecture"),
    ("CF-HM", "Haut-Mbomou", "Prefecture"),
    ("CF-HS", "Haute-Sangha / Mambéré-Kadéï", "Prefecture"),
    ("CF-KB", "Gribingui", "Economic prefecture"),
    ("CF-KG", "Kemö-Gïrïbïngï", "Prefecture"),
    ("CF-LB", "Lobaye", "Prefecture"),
    ("CF-MB", "Mbomou", "Prefecture"),
    ("CF-MP", "Ombella-Mpoko", "Prefecture"),
    ("CF-NM", "Nana-Mambéré", "Prefecture"),
    ("CF-OP", "Ouham-Pendé", "Prefecture"),
    ("CF-SE", "Sangha", "Economic prefecture"),
    ("CF-UK", "Ouaka", "Prefecture"),
    ("CF-VK", "Vakaga", "Prefecture"),
    ("CG-11", "Bouenza", "Department"),
    ("CG-12", "Pool", "Department"),
    ("CG-13", "Sangha", "Department"),
    ("CG-14", "Plateaux", "Department"),
    ("CG-15", "Cuvette-Ouest", "Department"),
    ("CG-16", "Pointe-Noire", "Department"),
    ("CG-2", "Lékoumou", "Department"),
    ("CG-5", "Kouilou", "Department"),
    ("CG-7", "Likouala", "Department"),
    ("CG-8", "Cuvette", "Department"),
    ("CG-9", "Niari", "Department"),
    ("CG-BZV", "Brazzaville", "Department"),
    ("CH-AG", "Aargau", "Canton"),
    ("CH-AI", "Appenzell Innerrhoden", "Canton"),
    ("CH-AR", "Appenzell Ausserrhoden", "Canton"),
    ("CH-BE", "Bern", "Canton"),
    ("CH-BL", "Basel-Landschaft", "Canton"),
    ("CH-BS", "Basel-Stadt", "Canton"),
    ("CH-FR", "Freiburg", "Canton"),
    ("CH-GE", "Genève", "Canton"),
    ("CH-GL", "Glarus", "Canton"),
    ("CH-GR", "Graubünden", "Canton"),
    ("CH-JU", "Jura", "Canton"),
    ("CH-LU", "Luzern", "Canton"),
    ("CH-NE", "Neuchâtel", "Canton"),
    ("CH-NW", "Nidwalden", "Canton"),
    ("CH-OW", "Obwalden", "Canton"),
    ("CH-SG", "Sankt Gallen", "Canton"),
    ("CH-SH", "Schaffhausen", "Canton"),
    ("CH-SO", "Solothurn", "Canton"),
    ("CH-SZ", "Schwyz", "Canton"),
    ("CH-TG", "Thurgau", "Canton"),
    ("CH-TI", "Ticino", "Canton"),
    ("CH-UR", "Uri", "Canton"),
    ("CH-VD", "Vaud", "Canton"),
    ("CH-VS", "Valais", "Canton"),
    ("CH-ZG", "Zug", "Canton"),
    ("CH-ZH", "Zürich", "Canton"),
    ("CI-AB", "Abidjan", "Autonomous district"),
    ("CI-BS", "Bas-Sassandra", "District"),
    ("CI-CM", "Comoé", "District"),
    ("CI-DN", "Denguélé", "District"),
    ("CI-GD", "Gôh-Djiboua", "District"),
    ("CI-LC", "Lacs", "District"),
    ("CI-LG", "Lagunes", "District"),
    ("CI-MG", "Montagnes", "District"),
    ("CI-SM", "Sassandra-Marahoué", "District"),
    ("CI-SV", "Savanes", "District"),
    ("CI-VB", "Vallée du Bandama", "District"),
    ("CI-WR", "Woroba", "District"),
    ("CI-YM", "Yamoussoukro", "Autonomous district"),
    ("CI-ZZ", "Zanzan", "District"),
    ("CL-AI", "Aisén del General Carlos Ibañez del Campo", "Region"),
    ("CL-AN", "Antofagasta", "Region"),
    ("CL-AP", "Arica y Parinacota", "Region"),
    ("CL-AR", "La Araucanía", "Region"),
    ("CL-AT", "Atacama", "Region"),
    ("CL-BI", "Biobío", "Region"),
    ("CL-CO", "Coquimbo", "Region"),
    ("CL-LI", "Libertador General Bernardo O'Higgins", "Region"),
    ("CL-LL", "Los Lagos", "Region"),
    ("CL-LR", "Los Ríos", "Region"),
    ("CL-MA", "Magallanes", "Region"),
    ("CL-ML", "Maule", "Region"),
    ("CL-NB", "Ñuble", "Region"),
    ("CL-RM", "Región Metropolitana de Santiago", "Region"),
    ("CL-TA", "Tarapacá", "Region"),
    ("CL-VS", "Valparaíso", "Region"),
    ("CM-AD", "Adamaoua", "Region"),
    ("CM-CE", "Centre", "Region"),
    ("CM-EN", "Far North", "Region"),
    ("CM-ES", "East", "Region"),
    ("CM-LT", "Littoral", "Region"),
    ("CM-NO", "North", "Region"),
    ("CM-NW", "North-West", "Region"),
    ("CM-OU", "West", "Region"),
    ("CM-SU", "South", "Region"),
    ("CM-SW", "South-West", "Region"),
    ("CN-AH", "Anhui Sheng", "Province"),
    ("CN-BJ", "Beijing Shi", "Municipality"),
    ("CN-CQ", "Chongqing Shi", "Municipality"),
    ("CN-FJ", "Fujian Sheng", "Province"),
    ("CN-GD", "Guangdong Sheng", "Province"),
    ("CN-GS", "Gansu Sheng", "Province"),
    ("CN-GX", "Guangxi Zhuangzu Zizhiqu", "Autonomous region"),
    ("CN-GZ", "Guizhou Sheng", "Province"),
    ("CN-HA", "Henan Sheng", "Province"),
    ("CN-HB", "Hubei Sheng", "Province"),
    ("CN-HE", "Hebei Sheng", "Province"),
    ("CN-HI", "Hainan Sheng", "Province"),
    ("CN-HK", "Hong Kong SAR", "Special administrative region"),
    ("CN-HL", "Heilongjiang Sheng", "Province"),
    ("CN-HN", "Hunan Sheng", "Province"),
    ("CN-JL", "Jilin Sheng", "Province"),
    ("CN-JS", "Jiangsu Sheng", "Province"),
    ("CN-JX", "Jiangxi Sheng", "Province"),
    ("CN-LN", "Liaoning Sheng", "Province"),
    ("CN-MO", "Macao SAR", "Special administrative region"),
    ("CN-NM", "Nei Mongol Zizhiqu", "Autonomous region"),
    ("CN-NX", "Ningxia Huizi Zizhiqu", "Autonomous region"),
    ("CN-QH", "Qinghai Sheng", "Province"),
    ("CN-SC", "Sichuan Sheng", "Province"),
    ("CN-SD", "Shandong Sheng", "Province"),
    ("CN-SH", "Shanghai Shi", "Municipality"),
    ("CN-SN", "Shaanxi Sheng", "Province"),
    ("CN-SX", "Shanxi Sheng", "Province"),
    ("CN-TJ", "Tianjin Shi", "Municipality"),
    ("CN-TW", "Taiwan Sheng", "Province"),
    ("CN-XJ", "Xinjiang Uygur Zizhiqu", "Autonomous region"),
    ("CN-XZ", "Xizang Zizhiqu", "Autonomous region"),
    ("CN-YN", "Yunnan Sheng", "Province"),
    ("CN-ZJ", "Zhejiang Sheng", "Province"),
    ("CO-AMA", "Amazonas", "Department"),
    ("CO-ANT", "Antioquia", "Department"),
    ("CO-ARA", "Arauca", "Department"),
    ("CO-ATL", "Atlántico", "Department"),
    ("CO-BOL", "Bolívar", "Department"),
    ("CO-BOY", "Boyacá", "Department"),
    ("CO-CAL", "Caldas", "Department"),
    ("CO-CAQ", "Caquetá", "Department"),
    ("CO-CAS", "Casanare", "Department"),
    ("CO-CAU", "Cauca", "Department"),
    ("CO-CES", "Cesar", "Department"),
    ("CO-CHO", "Chocó", "Department"),
    ("CO-COR", "Córdoba", "Department"),
    ("CO-CUN", "Cundinamarca", "Department"),
    ("CO-DC", "Distrito Capital de Bogotá", "Capital district"),
    ("CO-GUA", "Guainía", "Department"),
    ("CO-GUV", "Guaviare", "Department"),
    ("CO-HUI", "Huila", "Department"),
    ("CO-LAG", "La Guajira", "Department"),
    ("CO-MAG", "Magdalena", "Department"),
    ("CO-MET", "Meta", "Department"),
    ("CO-NAR", "Nariño", "Department"),
    ("CO-NSA", "Norte de Santander", "Department"),
    ("CO-PUT", "Putumayo", "Department"),
    ("CO-QUI", "Quindío", "Department"),
    ("CO-RIS", "Risaralda", "Department"),
    ("CO-SAN", "Santander", "Department"),
    ("CO-SAP", "San Andrés, Providencia y Santa Catalina", "Department"),
    ("CO-SUC", "Sucre", "Department"),
    ("CO-TOL", "Tolima", "Department"),
    ("CO-VAC", "Valle del Cauca", "Department"),
    ("CO-VAU", "Vaupés", "Department"),
    ("CO-VID", "Vichada", "Department"),
    ("CR-A", "Alajuela", "Province"),
    ("CR-C", "Cartago", "Province"),
    ("CR-G", "Guanacaste", "Province"),
    ("CR-H", "Heredia", "Province"),
    ("CR-L", "Limón", "Province"),
    ("CR-P", "Puntarenas", "Province"),
    ("CR-SJ", "San José", "Province"),
    ("CU-01", "Pinar del Río", "Province"),
    ("CU-03", "La Habana", "Province"),
    ("CU-04", "Matanzas", "Province"),
    ("CU-05", "Villa Clara", "Province"),
    ("CU-06", "Cienfuegos", "Province"),
    ("CU-07", "Sancti Spíritus", "Province"),
    ("CU-08", "Ciego de Ávila", "Province"),
    ("CU-09", "Camagüey", "Province"),
    ("CU-10", "Las Tunas", "Province"),
    ("CU-11", "Holguín", "Province"),
    ("CU-12", "Granma", "Province"),
    ("CU-13", "Santiago de Cuba", "Province"),
    ("CU-14", "Guantánamo", "Province"),
    ("CU-15", "Artemisa", "Province"),
    ("CU-16", "Mayabeque", "Province"),
    ("CU-99", "Isla de la Juventud", "Special municipality"),
    ("CV-B", "Ilhas de Barlavento", "Geographical region"),
    ("CV-BR", "Brava", "Municipality"),
    ("CV-BV", "Boa Vista", "Municipality"),
    ("CV-CA", "Santa Catarina", "Municipality"),
    ("CV-CF", "Santa Catarina do Fogo", "Municipality"),
    ("CV-CR", "Santa Cruz", "Municipality"),
    ("CV-MA", "Maio", "Municipality"),
    ("CV-MO", "Mosteiros", "Municipality"),
    ("CV-PA", "Paul", "Municipality"),
    ("CV-PN", "Porto Novo", "Municipality"),
    ("CV-PR", "Praia", "Municipality"),
    ("CV-RB", "Ribeira Brava", "Municipality"),
    ("CV-RG", "Ribeira Grande", "Municipality"),
    ("CV-RS", "Ribeira Grande de Santiago", "Municipality"),
    ("CV-S", "Ilhas de Sotavento", "Geographical region"),
    ("CV-SD", "São Domingos", "Municipality"),
    ("CV-SF", "São Filipe", "Municipality"),
    ("CV-SL", "Sal", "Municipality"),
    ("CV-SM", "São Miguel", "Municipality"),
    ("CV-SO", "São Lourenço dos Órgãos", "Municipality"),
    ("CV-SS", "São Salvador do Mundo", "Municipality"),
    ("CV-SV", "São Vicente", "Municipality"),
    ("CV-TA", "Tarrafal", "Municipality"),
    ("CV-TS", "Tarrafal de São Nicolau", "Municipality"),
    ("CY-01", "Lefkosia", "District"),
    ("CY-02", "Lemesos", "District"),
    ("CY-03", "Larnaka", "District"),
    ("CY-04", "Ammochostos", "District"),
    ("CY-05", "Baf", "District"),
    ("CY-06", "Girne", "District"),
    ("CZ-10", "Praha, Hlavní město", "Capital city"),
    ("CZ-20", "Středočeský kraj", "Region"),
    ("CZ-201", "Benešov", "District"),
    ("CZ-202", "Beroun", "District"),
    ("CZ-203", "Kladno", "District"),
    ("CZ-204", "Kolín", "District"),
    ("CZ-205", "Kutná Hora", "District"),
    ("CZ-206", "Mělník", "District"),
    ("CZ-207", "Mladá Boleslav", "District"),
    ("CZ-208", "Nymburk", "District"),
    ("CZ-209", "Praha-východ", "District"),
    ("CZ-20A", "Praha-západ", "District"),
    ("CZ-20B", "Příbram", "District"),
    ("CZ-20C", "Rakovník", "District"),
    ("CZ-31", "Jihočeský kraj", "Region"),
    ("CZ-311", "České Budějovice", "District"),
    ("CZ-312", "Český Krumlov", "District"),
    ("CZ-313", "Jindřichův Hradec", "District"),
    ("CZ-314", "Písek", "District"),
    ("CZ-315", "Prachatice", "District"),
    ("CZ-316", "Strakonice", "District"),
    ("CZ-317", "Tábor", "District"),
    ("CZ-32", "Plzeňský kraj", "Region"),
    ("CZ-321", "Domažlice", "District"),
    ("CZ-322", "Klatovy", "District"),
    ("CZ-323", "Plzeň-město", "District"),
    ("CZ-324", "Plzeň-jih", "District"),
    ("CZ-325", "Plzeň-sever", "District"),
    ("CZ-326", "Rokycany", "District"),
    ("CZ-327", "Tachov", "District"),
    ("CZ-41", "Karlovarský kraj", "Region"),
    ("CZ-411", "Cheb", "District"),
    ("CZ-412", "Karlovy Vary", "District"),
    ("CZ-413", "Sokolov", "District"),
    ("CZ-42", "Ústecký kraj", "Region"),
    ("CZ-421", "Děčín", "District"),
    ("CZ-422", "Chomutov", "District"),
    ("CZ-423", "Litoměřice", "District"),
    ("CZ-424", "Louny", "District"),
    ("CZ-425", "Most", "District"),
    ("CZ-426", "Teplice", "District"),
    ("CZ-427", "Ústí nad Labem", "District"),
    ("CZ-51", "Liberecký kraj", "Region"),
    ("CZ-511", "Česká Lípa", "District"),
    ("CZ-512", "Jablonec nad Nisou", "District"),
    ("CZ-513", "Liberec", "District"),
    ("CZ-514", "Semily", "District"),
    ("CZ-52", "Královéhradecký kraj", "Region"),
    ("CZ-521", "Hradec Králové", "District"),
    ("CZ-522", "Jičín", "District"),
    ("CZ-523", "Náchod", "District"),
    ("CZ-524", "Rychnov nad Kněžnou", "District"),
    ("CZ-525", "Trutnov", "District"),
    ("CZ-53", "Pardubický kraj", "Region"),
    ("CZ-531", "Chrudim", "District"),
    ("CZ-532", "Pardubice", "District"),
    ("CZ-533", "Svitavy", "District"),
    ("CZ-534", "Ústí nad Orlicí", "District"),
    ("CZ-63", "Kraj Vysočina", "Region"),
    ("CZ-631", "Havlíčkův Brod", "District"),
    ("CZ-632", "Jihlava", "District"),
    ("CZ-633", "Pelhřimov", "District"),
    ("CZ-634", "Třebíč", "District"),
    ("CZ-635", "Žďár nad Sázavou", "District"),
    ("CZ-64", "Jihomoravský kraj", "Region"),
    ("CZ-641", "Blansko", "District"),
    ("CZ-642", "Brno-město", "District"),
    ("CZ-643", "Brno-venkov", "District"),
    ("CZ-644", "Břeclav", "District"),
    ("CZ-645", "Hodonín", "District"),
    ("CZ-646", "Vyškov", "District"),
    ("CZ-647", "Znojmo", "District"),
    ("CZ-71", "Olomoucký kraj", "Region"),
    ("CZ-711", "Jeseník", "District"),
    ("CZ-712", "Olomouc", "District"),
    ("CZ-713", "Prostějov", "District"),
    ("CZ-714", "Přerov", "District"),
    ("CZ-715", "Šumperk", "District"),
    ("CZ-72", "Zlínský kraj", "Region"),
    ("CZ-721", "Kroměříž", "District"),
    ("CZ-722", "Uherské Hradiště", "District"),
    ("CZ-723", "Vsetín", "District"),
    ("CZ-724", "Zlín", "District"),
    ("CZ-80", "Moravskoslezský kraj", "Region"),
    ("CZ-801", "Bruntál", "District"),
    ("CZ-802", "Frýdek-Místek", "District"),
    ("CZ-803", "Karviná", "District"),
    ("CZ-804", "Nový Jičín", "District"),
    ("CZ-805", "Opava", "District"),
    ("CZ-806", "Ostrava-město", "District"),
    ("DE-BB", "Brandenburg", "Land"),
    ("DE-BE", "Berlin", "Land"),
    ("DE-BW", "Baden-Württemberg", "Land"),
    ("DE-BY", "Bayern", "Land"),
    ("DE-HB", "Bremen", "Land"),
    ("DE-HE", "Hessen", "Land"),
    ("DE-HH", "Hamburg", "Land"),
    ("DE-MV", "Mecklenburg-Vorpommern", "Land"),
    ("DE-NI", "Niedersachsen", "Land"),
    ("DE-NW", "Nordrhein-Westfalen", "Land"),
    ("DE-RP", "Rheinland-Pfalz", "Land"),
    ("DE-SH", "Schleswig-Holstein", "Land"),
    ("DE-SL", "Saarland", "Land"),
    ("DE-SN", "Sachsen", "Land"),
    ("DE-ST", "Sachsen-Anhalt", "Land"),
    ("DE-TH", "Thüringen", "Land"),
    ("DJ-AR", "Arta", "Region"),
    ("DJ-AS", "Ali Sabieh", "Region"),
    ("DJ-DI", "Dikhil", "Region"),
    ("DJ-DJ", "Djibouti", "City"),
    ("DJ-OB", "Awbūk", "Region"),
    ("DJ-TA", "Tadjourah", "Region"),
    ("DK-81", "Nordjylland", "Region"),
    ("DK-82", "Midtjylland", "Region"),
    ("DK-83", "Syddanmark", "Region"),
    ("DK-84", "Hovedstaden", "Region"),
    ("DK-85", "Sjælland", "Region"),
    ("DM-02", "Saint Andrew", "Parish"),
    ("DM-03", "Saint David", "Parish"),
    ("DM-04", "Saint George", "Parish"),
    ("DM-05", "Saint John", "Parish"),
    ("DM-06", "Saint Joseph", "Parish"),
    ("DM-07", "Saint Luke", "Parish"),
    ("DM-08", "Saint Mark", "Parish"),
    ("DM-09", "Saint Patrick", "Parish"),
    ("DM-10", "Saint Paul", "Parish"),
    ("DM-11", "Saint Peter", "Parish"),
    ("DO-01", "Distrito Nacional (Santo Domingo)", "District"),
    ("DO-02", "Azua", "Province"),
    ("DO-03", "Baoruco", "Province"),
    ("DO-04", "Barahona", "Province"),
    ("DO-05", "Dajabón", "Province"),
    ("DO-06", "Duarte", "Province"),
    ("DO-07", "Elías Piña", "Province"),
    ("DO-08", "El Seibo", "Province"),
    ("DO-09", "Espaillat", "Province"),
    ("DO-10", "Independencia", "Province"),
    ("DO-11", "La Altagracia", "Province"),
    ("DO-12", "La Romana", "Province"),
    ("DO-13", "La Vega", "Province"),
    ("DO-14", "María Trinidad Sánchez", "Province"),
    ("DO-15", "Monte Cristi", "Province"),
    ("DO-16", "Pedernales", "Province"),
    ("DO-17", "Peravia", "Province"),
    ("DO-18", "Puerto Plata", "Province"),
    ("DO-19", "Hermanas Mirabal", "Province"),
    ("DO-20", "Samaná", "Province"),
    ("DO-21", "San Cristóbal", "Province"),
    ("DO-22", "San Juan", "Province"),
    ("DO-23", "San Pedro de Macorís", "Province"),
    ("DO-24", "Sánchez Ramírez", "Province"),
    ("DO-25", "Santiago", "Province"),
    ("DO-26", "Santiago Rodríguez", "Province"),
    ("DO-27", "Valverde", "Province"),
    ("DO-28", "Monseñor Nouel", "Province"),
    ("DO-29", "Monte Plata", "Province"),
    ("DO-30", "Hato Mayor", "Province"),
    ("DO-31", "San José de Ocoa", "Province"),
    ("DO-32", "Santo Domingo", "Province"),
    ("DO-33", "Cibao Nordeste", "Region"),
    ("DO-34", "Cibao Noroeste", "Region"),
    ("DO-35", "Cibao Norte", "Region"),
    ("DO-36", "Cibao Sur", "Region"),
    ("DO-37", "El Valle", "Region"),
    ("DO-38", "Enriquillo", "Region"),
    ("DO-39", "Higuamo", "Region"),
    ("DO-40", "Ozama", "Region"),
    ("DO-41", "Valdesia", "Region"),
    ("DO-42", "Yuma", "Region"),
    ("DZ-01", "Adrar", "Province"),
    ("DZ-02", "Chlef", "Province"),
    ("DZ-03", "Laghouat", "Province"),
    ("DZ-04", "Oum el Bouaghi", "Province"),
    ("DZ-05", "Batna", "Province"),
    ("DZ-06", "Béjaïa", "Province"),
    ("DZ-07", "Biskra", "Province"),
    ("DZ-08", "Béchar", "Province"),
    ("DZ-09", "Blida", "Province"),
    ("DZ-10", "Bouira", "Province"),
    ("DZ-11", "Tamanrasset", "Province"),
    ("DZ-12", "Tébessa", "Province"),
    ("DZ-13", "Tlemcen", "Province"),
    ("DZ-14", "Tiaret", "Province"),
    ("DZ-15", "Tizi Ouzou", "Province"),
    ("DZ-16", "Alger", "Province"),
    ("DZ-17", "Djelfa", "Province"),
    ("DZ-18", "Jijel", "Province"),
    ("DZ-19", "Sétif", "Province"),
    ("DZ-20", "Saïda", "Province"),
    ("DZ-21", "Skikda", "Province"),
    ("DZ-22", "Sidi Bel Abbès", "Province"),
    ("DZ-23", "Annaba", "Province"),
    ("DZ-24", "Guelma", "Province"),
    ("DZ-25", "Constantine", "Province"),
    ("DZ-26", "Médéa", "Province"),
    ("DZ-27", "Mostaganem", "Province"),
    ("DZ-28", "M'sila", "Province"),
    ("DZ-29", "Mascara", "Province"),
    ("DZ-30", "Ouargla", "Province"),
    ("DZ-31", "Oran", "Province"),
    ("DZ-32", "El Bayadh", "Province"),
    ("DZ-33", "Illizi", "Province"),
    ("DZ-34", "Bordj Bou Arréridj", "Province"),
    ("DZ-35", "Boumerdès", "Province"),
    ("DZ-36", "El Tarf", "Province"),
    ("DZ-37", "Tindouf", "Province"),
    ("DZ-38", "Tissemsilt", "Province"),
    ("DZ-39", "El Oued", "Province"),
    ("DZ-40", "Khenchela", "Province"),
    ("DZ-41", "Souk Ahras", "Province"),
    ("DZ-42", "Tipaza", "Province"),
    ("DZ-43", "Mila", "Province"),
    ("DZ-44", "Aïn Defla", "Province"),
    ("DZ-45", "Naama", "Province"),
    ("DZ-46", "Aïn Témouchent", "Province"),
    ("DZ-47", "Ghardaïa", "Province"),
    ("DZ-48", "Relizane", "Province"),
    ("EC-A", "Azuay", "Province"),
    ("EC-B", "Bolívar", "Province"),
    ("EC-C", "Carchi", "Province"),
    ("EC-D", "Orellana", "Province"),
    ("EC-E", "Esmeraldas", "Province"),
    ("EC-F", "Cañar", "Province"),
    ("EC-G", "Guayas", "Province"),
    ("EC-H", "Chimborazo", "Province"),
    ("EC-I", "Imbabura", "Province"),
    ("EC-L", "Loja", "Province"),
    ("EC-M", "Manabí", "Province"),
    ("EC-N", "Napo", "Province"),
    ("EC-O", "El Oro", "Province"),
    ("EC-P", "Pichincha", "Province"),
    ("EC-R", "Los Ríos", "Province"),
    ("EC-S", "Morona Santiago", "Province"),
    ("EC-SD", "Santo Domingo de los Tsáchilas", "Province"),
    ("EC-SE", "Santa Elena", "Province"),
    ("EC-T", "Tungurahua", "Province"),
    ("EC-U", "Sucumbíos", "Province"),
    ("EC-W", "Galápagos", "Province"),
    ("EC-X", "Cotopaxi", "Province"),
    ("EC-Y", "Pastaza", "Province"),
    ("EC-Z", "Zamora Chinchipe", "Province"),
    ("EE-130", "Alutaguse", "Rural municipality"),
    ("EE-141", "Anija", "Rural municipality"),
    ("EE-142", "Antsla", "Rural municipality"),
    ("EE-171", "Elva", "Rural municipality"),
    ("EE-184", "Haapsalu", "Urban municipality"),
    ("EE-191", "Haljala", "Rural municipality"),
    ("EE-198", "Harku", "Rural municipality"),
    ("EE-205", "Hiiumaa", "Rural municipality"),
    ("EE-214", "Häädemeeste", "Rural municipality"),
    ("EE-245", "Jõelähtme", "Rural municipality"),
    ("EE-247", "Jõgeva", "Rural municipality"),
    ("EE-251", "Jõhvi", "Rural municipality"),
    ("EE-255", "Järva", "Rural municipality"),
    ("EE-272", "Kadrina", "Rural municipality"),
    ("EE-283", "Kambja", "Rural municipality"),
    ("EE-284", "Kanepi", "Rural municipality"),
    ("EE-291", "Kastre", "Rural municipality"),
    ("EE-293", "Kehtna", "Rural municipality"),
    ("EE-296", "Keila", "Urban municipality"),
    ("EE-303", "Kihnu", "Rural municipality"),
    ("EE-305", "Kiili", "Rural municipality"),
    ("EE-317", "Kohila", "Rural municipality"),
    ("EE-321", "Kohtla-Järve", "Urban municipality"),
    ("EE-338", "Kose", "Rural municipality"),
    ("EE-353", "Kuusalu", "Rural municipality"),
    ("EE-37", "Harjumaa", "County"),
    ("EE-39", "Hiiumaa", "County"),
    ("EE-424", "Loksa", "Urban municipality"),
    ("EE-430", "Lääneranna", "Rural municipality"),
    ("EE-431", "Lääne-Harju", "Rural municipality"),
    ("EE-432", "Luunja", "Rural municipality"),
    ("EE-441", "Lääne-Nigula", "Rural municipality"),
    ("EE-442", "Lüganuse", "Rural municipality"),
    ("EE-446", "Maardu", "Urban municipality"),
    ("EE-45", "Ida-Virumaa", "County"),
    ("EE-478", "Muhu", "Rural municipality"),
    ("EE-480", "Mulgi", "Rural municipality"),
    ("EE-486", "Mustvee", "Rural municipality"),
    ("EE-50", "Jõgevamaa", "County"),
    ("EE-503", "Märjamaa", "Rural municipality"),
    ("EE-511", "Narva", "Urban municipality"),
    ("EE-514", "Narva-Jõesuu", "Urban municipality"),
    ("EE-52", "Järvamaa", "County"),
    ("EE-528", "Nõo", "Rural municipality"),
    ("EE-557", "Otepää", "Rural municipality"),
    ("EE-56", "Läänemaa", "County"),
    ("EE-567", "Paide", "Urban municipality"),
    ("EE-586", "Peipsiääre", "Rural municipality"),
    ("EE-60", "Lääne-Virumaa", "County"),
    ("EE-615", "Põhja-Sakala", "Rural municipality"),
    ("EE-618", "Põltsamaa", "Rural municipality"),
    ("EE-622", "Põlva", "Rural municipality"),
    ("EE-624", "Pärnu", "Urban municipality"),
    ("EE-638", "Põhja-Pärnumaa", "Rural municipality"),
    ("EE-64", "Põlvamaa", "County"),
    ("EE-651", "Raasiku", "Rural municipality"),
    ("EE-653", "Rae", "Rural municipality"),
    ("EE-661", "Rakvere", "Rural municipality"),
    ("EE-663", "Rakvere", "Urban municipality"),
    ("EE-668", "Rapla", "Rural municipality"),
    ("EE-68", "Pärnumaa", "County"),
    ("EE-689", "Ruhnu", "Rural municipality"),
    ("EE-698", "Rõuge", "Rural municipality"),
    ("EE-708", "Räpina", "Rural municipality"),
    ("EE-71", "Raplamaa", "County"),
    ("EE-712", "Saarde", "Rural municipality"),
    ("EE-714", "Saaremaa", "Rural municipality"),
    ("EE-719", "Saku", "Rural municipality"),
    ("EE-726", "Saue", "Rural municipality"),
    ("EE-732", "Setomaa", "Rural municipality"),
    ("EE-735", "Sillamäe", "Urban municipality"),
    ("EE-74", "Saaremaa", "County"),
    ("EE-784", "Tallinn", "Urban municipality"),
    ("EE-79", "Tartumaa", "County"),
    ("EE-792", "Tapa", "Rural municipality"),
    ("EE-793", "Tartu", "Urban municipality"),
    ("EE-796", "Tartu", "Rural municipality"),
    ("EE-803", "Toila", "Rural municipality"),
    ("EE-809", "Tori", "Rural municipality"),
    ("EE-81", "Valgamaa", "County"),
    ("EE-824", "Tõrva", "Rural municipality"),
    ("EE-834", "Türi", "Rural municipality"),
    ("EE-84", "Viljandimaa", "County"),
    ("EE-855", "Valga", "Rural municipality"),
    ("EE-87", "Võrumaa", "County"),
    ("EE-890", "Viimsi", "Rural municipality"),
    ("EE-897", "Viljandi", "Urban municipality"),
    ("EE-899", "Viljandi", "Rural municipality"),
    ("EE-901", "Vinni", "Rural municipality"),
    ("EE-903", "Viru-Nigula", "Rural municipality"),
    ("EE-907", "Vormsi", "Rural municipality"),
    ("EE-917", "Võru", "Rural municipality"),
    ("EE-919", "Võru", "Urban municipality"),
    ("EE-928", "Väike-Maarja", "Rural municipality"),
    ("EG-ALX", "Al Iskandarīyah", "Governorate"),
    ("EG-ASN", "Aswān", "Governorate"),
    ("EG-AST", "Asyūţ", "Governorate"),
    ("EG-BA", "Al Baḩr al Aḩmar", "Governorate"),
    ("EG-BH", "Al Buḩayrah", "Governorate"),
    ("EG-BNS", "Banī Suwayf", "Governorate"),
    ("EG-C", "Al Qāhirah", "Governorate"),
    ("EG-DK", "Ad Daqahlīyah", "Governorate"),
    ("EG-DT", "Dumyāţ", "Governorate"),
    ("EG-FYM", "Al Fayyūm", "Governorate"),
    ("EG-GH", "Al Gharbīyah", "Governorate"),
    ("EG-GZ", "Al Jīzah", "Governorate"),
    ("EG-IS", "Al Ismā'īlīyah", "Governorate"),
    ("EG-JS", "Janūb Sīnā'", "Governorate"),
    ("EG-KB", "Al Qalyūbīyah", "Governorate"),
    ("EG-KFS", "Kafr ash Shaykh", "Governorate"),
    ("EG-KN", "Qinā", "Governorate"),
    ("EG-LX", "Al Uqşur", "Governorate"),
    ("EG-MN", "Al Minyā", "Governorate"),
    ("EG-MNF", "Al Minūfīyah", "Governorate"),
    ("EG-MT", "Maţrūḩ", "Governorate"),
    ("EG-PTS", "Būr Sa‘īd", "Governorate"),
    ("EG-SHG", "Sūhāj", "Governorate"),
    ("EG-SHR", "Ash Sharqīyah", "Governorate"),
    ("EG-SIN", "Shamāl Sīnā'", "Governorate"),
    ("EG-SUZ", "As Suways", "Governorate"),
    ("EG-WAD", "Al Wādī al Jadīd", "Governorate"),
    ("ER-AN", "Ansabā", "Region"),
    ("ER-DK", "Debubawi K’eyyĭḥ Baḥri", "Region"),
    ("ER-DU", "Al Janūbī", "Region"),
    ("ER-GB", "Gash-Barka", "Region"),
    ("ER-MA", "Al Awsaţ", "Region"),
    ("ER-SK", "Semienawi K’eyyĭḥ Baḥri", "Region"),
    ("ES-A", "Alacant*", "Province"),
    ("ES-AB", "Albacete", "Province"),
    ("ES-AL", "Almería", "Province"),
    ("ES-AN", "Andalucía", "Autonomous community"),
    ("ES-AR", "Aragón", "Autonomous community"),
    ("ES-AS", "Asturias, Principado de", "Autonomous community"),
    ("ES-AV", "Ávila", "Province"),
    ("ES-B", "Barcelona [Barcelona]", "Province"),
    ("ES-BA", "Badajoz", "Province"),
    ("ES-BI", "Bizkaia", "Province"),
    ("ES-BU", "Burgos", "Province"),
    ("ES-C", "A Coruña [La Coruña]", "Province"),
    ("ES-CA", "Cádiz", "Province"),
    ("ES-CB", "Cantabria", "Autonomous community"),
    ("ES-CC", "Cáceres", "Province"),
    ("ES-CE", "Ceuta", "Autonomous city in north africa"),
    ("ES-CL", "Castilla y León", "Autonomous community"),
    ("ES-CM", "Castilla-La Mancha", "Autonomous community"),
    ("ES-CN", "Canarias", "Autonomous community"),
    ("ES-CO", "Córdoba", "Province"),
    ("ES-CR", "Ciudad Real", "Province"),
    ("ES-CS", "Castelló*", "Province"),
    ("ES-CT", "Catalunya [Cataluña]", "Autonomous community"),
    ("ES-CU", "Cuenca", "Province"),
    ("ES-EX", "Extremadura", "Autonomous community"),
    ("ES-GA", "Galicia [Galicia]", "Autonomous community"),
    ("ES-GC", "Las Palmas", "Province"),
    ("ES-GI", "Girona [Gerona]", "Province"),
    ("ES-GR", "Granada", "Province"),
    ("ES-GU", "Guadalajara", "Province"),
    ("ES-H", "Huelva", "Province"),
    ("ES-HU", "Huesca", "Province"),
    ("ES-IB", "Illes Balears [Islas Baleares]", "Autonomous community"),
    ("ES-J", "Jaén", "Province"),
    ("ES-L", "Lleida [Lérida]", "Province"),
    ("ES-LE", "León", "Province"),
    ("ES-LO", "La Rioja", "Province"),
    ("ES-LU", "Lugo [Lugo]", "Province"),
    ("ES-M", "Madrid", "Province"),
    ("ES-MA", "Málaga", "Province"),
    ("ES-MC", "Murcia, Región de", "Autonomous community"),
    ("ES-MD", "Madrid, Comunidad de", "Autonomous community"),
    ("ES-ML", "Melilla", "Autonomous city in north africa"),
    ("ES-MU", "Murcia", "Province"),
    ("ES-NA", "Nafarroa*", "Province"),
    ("ES-NC", "Nafarroako Foru Komunitatea*", "Autonomous community"),
    ("ES-O", "Asturias", "Province"),
    ("ES-OR", "Ourense [Orense]", "Province"),
    ("ES-P", "Palencia", "Province"),
    ("ES-PM", "Illes Balears [Islas Baleares]", "Province"),
    ("ES-PO", "Pontevedra [Pontevedra]", "Province"),
    ("ES-PV", "Euskal Herria", "Autonomous community"),
    ("ES-RI", "La Rioja", "Autonomous community"),
    ("ES-S", "Cantabria", "Province"),
    ("ES-SA", "Salamanca", "Province"),
    ("ES-SE", "Sevilla", "Province"),
    ("ES-SG", "Segovia", "Province"),
    ("ES-SO", "Soria", "Province"),
    ("ES-SS", "Gipuzkoa", "Province"),
    ("ES-T", "Tarragona [Tarragona]", "Province"),
    ("ES-TE", "Teruel", "Province"),
    ("ES-TF", "Santa Cruz de Tenerife", "Province"),
    ("ES-TO", "Toledo", "Province"),
    ("ES-V", "Valencia", "Province"),
    ("ES-VA", "Valladolid", "Province"),
    ("ES-VC", "Valenciana, Comunidad", "Autonomous community"),
    ("ES-VI", "Araba*", "Province"),
    ("ES-Z", "Zaragoza", "Province"),
    ("ES-ZA", "Zamora", "Province"),
    ("ET-AA", "Addis Ababa", "Administration"),
    ("ET-AF", "Afar", "Regional state"),
    ("ET-AM", "Amara", "Regional state"),
    ("ET-BE", "Benshangul-Gumaz", "Regional state"),
    ("ET-DD", "Dire Dawa", "Administration"),
    ("ET-GA", "Gambela Peoples", "Regional state"),
    ("ET-HA", "Harari People", "Regional state"),
    ("ET-OR", "Oromia", "Regional state"),
    ("ET-SN", "Southern Nations, Nationalities and Peoples", "Regional state"),
    ("ET-SO", "Somali", "Regional state"),
    ("ET-TI", "Tigrai", "Regional state"),
    ("FI-01", "Åland", "Region"),
    ("FI-02", "Etelä-Karjala", "Region"),
    ("FI-03", "Etelä-Pohjanmaa", "Region"),
    ("FI-04", "Etelä-Savo", "Region"),
    ("FI-05", "Kainuu", "Region"),
    ("FI-06", "Kanta-Häme", "Region"),
    ("FI-07", "Keski-Pohjanmaa", "Region"),
    ("FI-08", "Keski-Suomi", "Region"),
    ("FI-09", "Kymenlaakso", "Region"),
    ("FI-10", "Lappi", "Region"),
    ("FI-11", "Pirkanmaa", "Region"),
    ("FI-12", "Pohjanmaa", "Region"),
    ("FI-13", "Pohjois-Karjala", "Region"),
    ("FI-14", "Pohjois-Pohjanmaa", "Region"),
    ("FI-15", "Pohjois-Savo", "Region"),
    ("FI-16", "Päijät-Häme", "Region"),
    ("FI-17", "Satakunta", "Region"),
    ("FI-18", "Uusimaa", "Region"),
    ("FI-19", "Varsinais-Suomi", "Region"),
    ("FJ-01", "Ba", "Province"),
    ("FJ-02", "Bua", "Province"),
    ("FJ-03", "Cakaudrove", "Province"),
    ("FJ-04", "Kadavu", "Province"),
    ("FJ-05", "Lau", "Province"),
    ("FJ-06", "Lomaiviti", "Province"),
    ("FJ-07", "Macuata", "Province"),
    ("FJ-08", "Nadroga and Navosa", "Province"),
    ("FJ-09", "Naitasiri", "Province"),
    ("FJ-10", "Namosi", "Province"),
    ("FJ-11", "Ra", "Province"),
    ("FJ-12", "Rewa", "Province"),
    ("FJ-13", "Serua", "Province"),
    ("FJ-14", "Tailevu", "Province"),
    ("FJ-C", "Central", "Division"),
    ("FJ-E", "Eastern", "Division"),
    ("FJ-N", "Northern", "Division"),
    ("FJ-R", "Rotuma", "Dependency"),
    ("FJ-W", "Western", "Division"),
    ("FM-KSA", "Kosrae", "State"),
    ("FM-PNI", "Pohnpei", "State"),
    ("FM-TRK", "Chuuk", "State"),
    ("FM-YAP", "Yap", "State"),
    ("FR-01", "Ain", "Metropolitan department"),
    ("FR-02", "Aisne", "Metropolitan department"),
    ("FR-03", "Allier", "Metropolitan department"),
    ("FR-04", "Alpes-de-Haute-Provence", "Metropolitan department"),
    ("FR-05", "Hautes-Alpes", "Metropolitan department"),
    ("FR-06", "Alpes-Maritimes", "Metropolitan department"),
    ("FR-07", "Ardèche", "Metropolitan department"),
    ("FR-08", "Ardennes", "Metropolitan department"),
    ("FR-09", "Ariège", "Metropolitan department"),
    ("FR-10", "Aube", "Metropolitan department"),
    ("FR-11", "Aude", "Metropolitan department"),
    ("FR-12", "Aveyron", "Metropolitan department"),
    ("FR-13", "Bouches-du-Rhône", "Metropolitan department"),
    ("FR-14", "Calvados", "Metropolitan department"),
    ("FR-15", "Cantal", "Metropolitan department"),
    ("FR-16", "Charente", "Metropolitan department"),
    ("FR-17", "Charente-Maritime", "Metropolitan department"),
    ("FR-18", "Cher", "Metropolitan department"),
    ("FR-19", "Corrèze", "Metropolitan department"),
    ("FR-20R", "Corse", "Metropolitan collectivity with special status"),
    ("FR-21", "Côte-d'Or", "Metropolitan department"),
    ("FR-22", "Côtes-d'Armor", "Metropolitan department"),
    ("FR-23", "Creuse", "Metropolitan department"),
    ("FR-24", "Dordogne", "Metropolitan department"),
    ("FR-25", "Doubs", "Metropolitan department"),
    ("FR-26", "Drôme", "Metropolitan department"),
    ("FR-27", "Eure", "Metropolitan department"),
    ("FR-28", "Eure-et-Loir", "Metropolitan department"),
    ("FR-29", "Finistère", "Metropolitan department"),
    ("FR-2A", "Corse-du-Sud", "Metropolitan department"),
    ("FR-2B", "Haute-Corse", "Metropolitan department"),
    ("FR-30", "Gard", "Metropolitan department"),
    ("FR-31", "Haute-Garonne", "Metropolitan department"),
    ("FR-32", "Gers", "Metropolitan department"),
    ("FR-33", "Gironde", "Metropolitan department"),
    ("FR-34", "Hérault", "Metropolitan department"),
    ("FR-35", "Ille-et-Vilaine", "Metropolitan department"),
    ("FR-36", "Indre", "Metropolitan department"),
    ("FR-37", "Indre-et-Loire", "Metropolitan department"),
    ("FR-38", "Isère", "Metropolitan department"),
    ("FR-39", "Jura", "Metropolitan department"),
    ("FR-40", "Landes", "Metropolitan department"),
    ("FR-41", "Loir-et-Cher", "Metropolitan department"),
    ("FR-42", "Loire", "Metropolitan department"),
    ("FR-43", "Haute-Loire", "Metropolitan department"),
    ("FR-44", "Loire-Atlantique", "Metropolitan department"),
    ("FR-45", "Loiret", "Metropolitan department"),
    ("FR-46", "Lot", "Metropolitan department"),
    ("FR-47", "Lot-et-Garonne", "Metropolitan department"),
    ("FR-48", "Lozère", "Metropolitan department"),
    ("FR-49", "Maine-et-Loire", "Metropolitan department"),
    ("FR-50", "Manche", "Metropolitan department"),
    ("FR-51", "Marne", "Metropolitan department"),
    ("FR-52", "Haute-Marne", "Metropolitan department"),
    ("FR-53", "Mayenne", "Metropolitan department"),
    ("FR-54", "Meurthe-et-Moselle", "Metropolitan department"),
    ("FR-55", "Meuse", "Metropolitan department"),
    ("FR-56", "Morbihan", "Metropolitan department"),
    ("FR-57", "Moselle", "Metropolitan department"),
    ("FR-58", "Nièvre", "Metropolitan department"),
    ("FR-59", "Nord", "Metropolitan department"),
    ("FR-60", "Oise", "Metropolitan department"),
    ("FR-61", "Orne", "Metropolitan department"),
    ("FR-62", "Pas-de-Calais", "Metropolitan department"),
    ("FR-63", "Puy-de-Dôme", "Metropolitan department"),
    ("FR-64", "Pyrénées-Atlantiques", "Metropolitan department"),
    ("FR-65", "Hautes-Pyrénées", "Metropolitan department"),
    ("FR-66", "Pyrénées-Orientales", "Metropolitan department"),
    ("FR-67", "Bas-Rhin", "Metropolitan department"),
    ("FR-68", "Haut-Rhin", "Metropolitan department"),
    ("FR-69", "Rhône", "Metropolitan department"),
    ("FR-70", "Haute-Saône", "Metropolitan department"),
    ("FR-71", "Saône-et-Loire", "Metropolitan department"),
    ("FR-72", "Sarthe", "Metropolitan department"),
    ("FR-73", "Savoie", "Metropolitan department"),
    ("FR-74", "Haute-Savoie", "Metropolitan department"),
    ("FR-75", "Paris", "Metropolitan department"),
    ("FR-76", "Seine-Maritime", "Metropolitan department"),
    ("FR-77", "Seine-et-Marne", "Metropolitan department"),
    ("FR-78", "Yvelines", "Metropolitan department"),
    ("FR-79", "Deux-Sèvres", "Metropolitan department"),
    ("FR-80", "Somme", "Metropolitan department"),
    ("FR-81", "Tarn", "Metropolitan department"),
    ("FR-82", "Tarn-et-Garonne", "Metropolitan department"),
    ("FR-83", "Var", "Metropolitan department"),
    ("FR-84", "Vaucluse", "Metropolitan department"),
    ("FR-85", "Vendée", "Metropolitan department"),
    ("FR-86", "Vienne", "Metropolitan department"),
    ("FR-87", "Haute-Vienne", "Metropolitan department"),
    ("FR-88", "Vosges", "Metropolitan department"),
    ("FR-89", "Yonne", "Metropolitan department"),
    ("FR-90", "Territoire de Belfort", "Metropolitan department"),
    ("FR-91", "Essonne", "Metropolitan department"),
    ("FR-92", "Hauts-de-Seine", "Metropolitan department"),
    ("FR-93", "Seine-Saint-Denis", "Metropolitan department"),
    ("FR-94", "Val-de-Marne", "Metropolitan department"),
    ("FR-95", "Val-d'Oise", "Metropolitan department"),
    ("FR-971", "Guadeloupe", "Overseas department"),
    ("FR-972", "Martinique", "Overseas department"),
    ("FR-973", "Guyane (française)", "Overseas department"),
    ("FR-974", "La Réunion", "Overseas department"),
    ("FR-976", "Mayotte", "Overseas department"),
    ("FR-ARA", "Auvergne-Rhône-Alpes", "Metropolitan region"),
    ("FR-BFC", "Bourgogne-Franche-Comté", "Metropolitan region"),
    ("FR-BL", "Saint-Barthélemy", "Overseas collectivity"),
    ("FR-BRE", "Bretagne", "Metropolitan region"),
    ("FR-CP", "Clipperton", "Dependency"),
    ("FR-CVL", "Centre-Val de Loire", "Metropolitan region"),
    ("FR-GES", "Grand-Est", "Metropolitan region"),
    ("FR-GF", "Guyane (française)", "Overseas region"),
    ("FR-GP", "Guadeloupe", "Overseas region"),
    ("FR-HDF", "Hauts-de-France", "Metropolitan region"),
    ("FR-IDF", "Île-de-France", "Metropolitan region"),
    ("FR-MF", "Saint-Martin", "Overseas collectivity"),
    ("FR-MQ", "Martinique", "Overseas region"),
    ("FR-NAQ", "Nouvelle-Aquitaine", "Metropolitan region"),
    ("FR-NC", "Nouvelle-Calédonie", "Overseas collectivity with special status"),
    ("FR-NOR", "Normandie", "Metropolitan region"),
    ("FR-OCC", "Occitanie", "Metropolitan region"),
    ("FR-PAC", "Provence-Alpes-Côte-d’Azur", "Metropolitan region"),
    ("FR-PDL", "Pays-de-la-Loire", "Metropolitan region"),
    ("FR-PF", "Polynésie française", "Overseas collectivity"),
    ("FR-PM", "Saint-Pierre-et-Miquelon", "Overseas collectivity"),
    ("FR-RE", "La Réunion", "Overseas region"),
    ("FR-TF", "Terres australes françaises", "Overseas territory"),
    ("FR-WF", "Wallis-et-Futuna", "Overseas collectivity"),
    ("FR-YT", "Mayotte", "Overseas region"),
    ("GA-1", "Estuaire", "Province"),
    ("GA-2", "Haut-Ogooué", "Province"),
    ("GA-3", "Moyen-Ogooué", "Province"),
    ("GA-4", "Ngounié", "Province"),
    ("GA-5", "Nyanga", "Province"),
    ("GA-6", "Ogooué-Ivindo", "Province"),
    ("GA-7", "Ogooué-Lolo", "Province"),
    ("GA-8", "Ogooué-Maritime", "Province"),
    ("GA-9", "Woleu-Ntem", "Province"),
    ("GB-ABC", "Armagh City, Banbridge and Craigavon", "District"),
    ("GB-ABD", "Aberdeenshire", "Council area"),
    ("GB-ABE", "Aberdeen City", "Council area"),
    ("GB-AGB", "Argyll and Bute", "Council area"),
    ("GB-AGY", "Isle of Anglesey [Sir Ynys Môn GB-YNM]", "Unitary authority"),
    ("GB-AND", "Ards and North Down", "District"),
    ("GB-ANN", "Antrim and Newtownabbey", "District"),
    ("GB-ANS", "Angus", "Council area"),
    ("GB-BAS", "Bath and North East Somerset", "Unitary authority"),
    ("GB-BBD", "Blackburn with Darwen", "Unitary authority"),
    ("GB-BCP", "Bournemouth, Christchurch and Poole", "Unitary authority"),
    ("GB-BDF", "Bedford", "Unitary authority"),
    ("GB-BDG", "Barking and Dagenham", "London borough"),
    ("GB-BEN", "Brent", "London borough"),
    ("GB-BEX", "Bexley", "London borough"),
    ("GB-BFS", "Belfast City", "District"),
    ("GB-BGE", "Bridgend [Pen-y-bont ar Ogwr GB-POG]", "Unitary authority"),
    ("GB-BGW", "Blaenau Gwent", "Unitary authority"),
    ("GB-BIR", "Birmingham", "Metropolitan district"),
    ("GB-BKM", "Buckinghamshire", "Two-tier county"),
    ("GB-BNE", "Barnet", "London borough"),
    ("GB-BNH", "Brighton and Hove", "Unitary authority"),
    ("GB-BNS", "Barnsley", "Metropolitan district"),
    ("GB-BOL", "Bolton", "Metropolitan district"),
    ("GB-BPL", "Blackpool", "Unitary authority"),
    ("GB-BRC", "Bracknell Forest", "Unitary authority"),
    ("GB-BRD", "Bradford", "Metropolitan district"),
    ("GB-BRY", "Bromley", "London borough"),
    ("GB-BST", "Bristol, City of", "Unitary authority"),
    ("GB-BUR", "Bury", "Metropolitan district"),
    ("GB-CAM", "Cambridgeshire", "Two-tier county"),
    ("GB-CAY", "Caerphilly [Caerffili GB-CAF]", "Unitary authority"),
    ("GB-CBF", "Central Bedfordshire", "Unitary authority"),
    ("GB-CCG", "Causeway Coast and Glens", "District"),
    ("GB-CGN", "Ceredigion [Sir Ceredigion]", "Unitary authority"),
    ("GB-CHE", "Cheshire East", "Unitary authority"),
    ("GB-CHW", "Cheshire West and Chester", "Unitary authority"),
    ("GB-CLD", "Calderdale", "Metropolitan district"),
    ("GB-CLK", "Clackmannanshire", "Council area"),
    ("GB-CMA", "Cumbria", "Two-tier county"),
    ("GB-CMD", "Camden", "London borough"),
    ("GB-CMN", "Carmarthenshire [Sir Gaerfyrddin GB-GFY]", "Unitary authority"),
    ("GB-CON", "Cornwall", "Unitary authority"),
    ("GB-COV", "Coventry", "Metropolitan district"),
    ("GB-CRF", "Cardiff [Caerdydd GB-CRD]", "Unitary authority"),
    ("GB-CRY", "Croydon", "London borough"),
    ("GB-CWY", "Conwy", "Unitary authority"),
    ("GB-DAL", "Darlington", "Unitary authority"),
    ("GB-DBY", "Derbyshire", "Two-tier county"),
    ("GB-DEN", "Denbighshire [Sir Ddinbych GB-DDB]", "Unitary authority"),
    ("GB-DER", "Derby", "Unitary authority"),
    ("GB-DEV", "Devon", "Two-tier county"),
    ("GB-DGY", "Dumfries and Galloway", "Council area"),
    ("GB-DNC", "Doncaster", "Metropolitan district"),
    ("GB-DND", "Dundee City", "Council area"),
    ("GB-DOR", "Dorset", "Two-tier county"),
    ("GB-DRS", "Derry and Strabane", "District"),
    ("GB-DUD", "Dudley", "Metropolitan district"),
    ("GB-DUR", "Durham, County", "Unitary authority"),
    ("GB-EAL", "Ealing", "London borough"),
    ("GB-EAY", "East Ayrshire", "Council area"),
    ("GB-EDH", "Edinburgh, City of", "Council area"),
    ("GB-EDU", "East Dunbartonshire", "Council area"),
    ("GB-ELN", "East Lothian", "Council area"),
    ("GB-ELS", "Eilean Siar", "Council area"),
    ("GB-ENF", "Enfield", "London borough"),
    ("GB-ENG", "England", "Country"),
    ("GB-ERW", "East Renfrewshire", "Council area"),
    ("GB-ERY", "East Riding of Yorkshire", "Unitary authority"),
    ("GB-ESS", "Essex", "Two-tier county"),
    ("GB-ESX", "East Sussex", "Two-tier county"),
    ("GB-FAL", "Falkirk", "Council area"),
    ("GB-FIF", "Fife", "Council area"),
    ("GB-FLN", "Flintshire [Sir y Fflint GB-FFL]", "Unitary authority"),
    ("GB-FMO", "Fermanagh and Omagh", "District"),
    ("GB-GAT", "Gateshead", "Metropolitan district"),
    ("GB-GLG", "Glasgow City", "Council area"),
    ("GB-GLS", "Gloucestershire", "Two-tier county"),
    ("GB-GRE", "Greenwich", "London borough"),
    ("GB-GWN", "Gwynedd", "Unitary authority"),
    ("GB-HAL", "Halton", "Unitary authority"),
    ("GB-HAM", "Hampshire", "Two-tier county"),
    ("GB-HAV", "Havering", "London borough"),
    ("GB-HCK", "Hackney", "London borough"),
    ("GB-HEF", "Herefordshire", "Unitary authority"),
    ("GB-HIL", "Hillingdon", "London borough"),
    ("GB-HLD", "Highland", "Council area"),
    ("GB-HMF", "Hammersmith and Fulham", "London borough"),
    ("GB-HNS", "Hounslow", "London borough"),
    ("GB-HPL", "Hartlepool", "Unitary authority"),
    ("GB-HRT", "Hertfordshire", "Two-tier county"),
    ("GB-HRW", "Harrow", "London borough"),
    ("GB-HRY", "Haringey", "London borough"),
    ("GB-IOS", "Isles of Scilly", "Unitary authority"),
    ("GB-IOW", "Isle of Wight", "Unitary authority"),
    ("GB-ISL", "Islington", "London borough"),
    ("GB-IVC", "Inverclyde", "Council area"),
    ("GB-KEC", "Kensington and Chelsea", "London borough"),
    ("GB-KEN", "Kent", "Two-tier county"),
    ("GB-KHL", "Kingston upon Hull", "Unitary authority"),
    ("GB-KIR", "Kirklees", "Metropolitan district"),
    ("GB-KTT", "Kingston upon Thames", "London borough"),
    ("GB-KWL", "Knowsley", "Metropolitan district"),
    ("GB-LAN", "Lancashire", "Two-tier county"),
    ("GB-LBC", "Lisburn and Castlereagh", "District"),
    ("GB-LBH", "Lambeth", "London borough"),
    ("GB-LCE", "Leicester", "Unitary authority"),
    ("GB-LDS", "Leeds", "Metropolitan district"),
    ("GB-LEC", "Leicestershire", "Two-tier county"),
    ("GB-LEW", "Lewisham", "London borough"),
    ("GB-LIN", "Lincolnshire", "Two-tier county"),
    ("GB-LIV", "Liverpool", "Metropolitan district"),
    ("GB-LND", "London, City of", "City corporation"),
    ("GB-LUT", "Luton", "Unitary authority"),
    ("GB-MAN", "Manchester", "Metropolitan district"),
    ("GB-MDB", "Middlesbrough", "Unitary authority"),
    ("GB-MDW", "Medway", "Unitary authority"),
    ("GB-MEA", "Mid and East Antrim", "District"),
    ("GB-MIK", "Milton Keynes", "Unitary authority"),
    ("GB-MLN", "Midlothian", "Council area"),
    ("GB-MON", "Monmouthshire [Sir Fynwy GB-FYN]", "Unitary authority"),
    ("GB-MRT", "Merton", "London borough"),
    ("GB-MRY", "Moray", "Council area"),
    ("GB-MTY", "Merthyr Tydfil [Merthyr Tudful GB-MTU]", "Unitary authority"),
    ("GB-MUL", "Mid-Ulster", "District"),
    ("GB-NAY", "North Ayrshire", "Council area"),
    ("GB-NBL", "Northumberland", "Unitary authority"),
    ("GB-NEL", "North East Lincolnshire", "Unitary authority"),
    ("GB-NET", "Newcastle upon Tyne", "Metropolitan district"),
    ("GB-NFK", "Norfolk", "Two-tier county"),
    ("GB-NGM", "Nottingham", "Unitary authority"),
    ("GB-NIR", "Northern Ireland", "Province"),
    ("GB-NLK", "North Lanarkshire", "Council area"),
    ("GB-NLN", "North Lincolnshire", "Unitary authority"),
    ("GB-NMD", "Newry, Mourne and Down", "District"),
    ("GB-NSM", "North Somerset", "Unitary authority"),
    ("GB-NTH", "Northamptonshire", "Two-tier county"),
    ("GB-NTL", "Neath Port Talbot [Castell-nedd Port Talbot GB-CTL]", "Unitary authority"),
    ("GB-NTT", "Nottinghamshire", "Two-tier county"),
    ("GB-NTY", "North Tyneside", "Metropolitan district"),
    ("GB-NWM", "Newham", "London borough"),
    ("GB-NWP", "Newport [Casnewydd GB-CNW]", "Unitary authority"),
    ("GB-NYK", "North Yorkshire", "Two-tier county"),
    ("GB-OLD", "Oldham", "Metropolitan district"),
    ("GB-ORK", "Orkney Islands", "Council area"),
    ("GB-OXF", "Oxfordshire", "Two-tier county"),
    ("GB-PEM", "Pembrokeshire [Sir Benfro GB-BNF]", "Unitary authority"),
    ("GB-PKN", "Perth and Kinross", "Council area"),
    ("GB-PLY", "Plymouth", "Unitary authority"),
    ("GB-POR", "Portsmouth", "Unitary authority"),
    ("GB-POW", "Powys", "Unitary authority"),
    ("GB-PTE", "Peterborough", "Unitary authority"),
    ("GB-RCC", "Redcar and Cleveland", "Unitary authority"),
    ("GB-RCH", "Rochdale", "Metropolitan district"),
    ("GB-RCT", "Rhondda Cynon Taff [Rhondda CynonTaf]", "Unitary authority"),
    ("GB-RDB", "Redbridge", "London borough"),
    ("GB-RDG", "Reading", "Unitary authority"),
    ("GB-RFW", "Renfrewshire", "Council area"),
    ("GB-RIC", "Richmond upon Thames", "London borough"),
    ("GB-ROT", "Rotherham", "Metropolitan district"),
    ("GB-RUT", "Rutland", "Unitary authority"),
    ("GB-SAW", "Sandwell", "Metropolitan district"),
    ("GB-SAY", "South Ayrshire", "Council area"),
    ("GB-SCB", "Scottish Borders", "Council area"),
    ("GB-SCT", "Scotland", "Country"),
    ("GB-SFK", "Suffolk", "Two-tier county"),
    ("GB-SFT", "Sefton", "Metropolitan district"),
    ("GB-SGC", "South Gloucestershire", "Unitary authority"),
    ("GB-SHF", "Sheffield", "Metropolitan district"),
    ("GB-SHN", "St. Helens", "Metropolitan district"),
    ("GB-SHR", "Shropshire", "Unitary authority"),
    ("GB-SKP", "Stockport", "Metropolitan district"),
    ("GB-SLF", "Salford", "Metropolitan district"),
    ("GB-SLG", "Slough", "Unitary authority"),
    ("GB-SLK", "South Lanarkshire", "Council area"),
    ("GB-SND", "Sunderland", "Metropolitan district"),
    ("GB-SOL", "Solihull", "Metropolitan district"),
    ("GB-SOM", "Somerset", "Two-tier county"),
    ("GB-SOS", "Southend-on-Sea", "Unitary authority"),
    ("GB-SRY", "Surrey", "Two-tier county"),
    ("GB-STE", "Stoke-on-Trent", "Unitary authority"),
    ("GB-STG", "Stirling", "Council area"),
    ("GB-STH", "Southampton", "Unitary authority"),
    ("GB-STN", "Sutton", "London borough"),
    ("GB-STS", "Staffordshire", "Two-tier county"),
    ("GB-STT", "Stockton-on-Tees", "Unitary authority"),
    ("GB-STY", "South Tyneside", "Metropolitan district"),
    ("GB-SWA", "Swansea [Abertawe GB-ATA]", "Unitary authority"),
    ("GB-SWD", "Swindon", "Unitary authority"),
    ("GB-SWK", "Southwark", "London borough"),
    ("GB-TAM", "Tameside", "Metropolitan district"),
    ("GB-TFW", "Telford and Wrekin", "Unitary authority"),
    ("GB-THR", "Thurrock", "Unitary authority"),
    ("GB-TOB", "Torbay", "Unitary authority"),
    ("GB-TOF", "Torfaen [Tor-faen]", "Unitary authority"),
    ("GB-TRF", "Trafford", "Metropolitan district"),
    ("GB-TWH", "Tower Hamlets", "London borough"),
    ("GB-VGL", "Vale of Glamorgan, The [Bro Morgannwg GB-BMG]", "Unitary authority"),
    ("GB-WAR", "Warwickshire", "Two-tier county"),
    ("GB-WBK", "West Berkshire", "Unitary authority"),
    ("GB-WDU", "West Dunbartonshire", "Council area"),
    ("GB-WFT", "Waltham Forest", "London borough"),
    ("GB-WGN", "Wigan", "Metropolitan district"),
    ("GB-WIL", "Wiltshire", "Unitary authority"),
    ("GB-WKF", "Wakefield", "Metropolitan district"),
    ("GB-WLL", "Walsall", "Metropolitan district"),
    ("GB-WLN", "West Lothian", "Council area"),
    ("GB-WLS", "Wales [Cymru GB-CYM]", "Country"),
    ("GB-WLV", "Wolverhampton", "Metropolitan district"),
    ("GB-WND", "Wandsworth", "London borough"),
    ("GB-WNM", "Windsor and Maidenhead", "Unitary authority"),
    ("GB-WOK", "Wokingham", "Unitary authority"),
    ("GB-WOR", "Worcestershire", "Two-tier county"),
    ("GB-WRL", "Wirral", "Metropolitan district"),
    ("GB-WRT", "Warrington", "Unitary authority"),
    ("GB-WRX", "Wrexham [Wrecsam GB-WRC]", "Unitary authority"),
    ("GB-WSM", "Westminster", "London borough"),
    ("GB-WSX", "West Sussex", "Two-tier county"),
    ("GB-YOR", "York", "Unitary authority"),
    ("GB-ZET", "Shetland Islands", "Council area"),
    ("GD-01", "Saint Andrew", "Parish"),
    ("GD-02", "Saint David", "Parish"),
    ("GD-03", "Saint George", "Parish"),
    ("GD-04", "Saint John", "Parish"),
    ("GD-05", "Saint Mark", "Parish"),
    ("GD-06", "Saint Patrick", "Parish"),
    ("GD-10", "Southern Grenadine Islands", "Dependency"),
    ("GE-AB", "Abkhazia", "Autonomous republic"),
    ("GE-AJ", "Ajaria", "Autonomous republic"),
    ("GE-GU", "Guria", "Region"),
    ("GE-IM", "Imereti", "Region"),
    ("GE-KA", "K'akheti", "Region"),
    ("GE-KK", "Kvemo Kartli", "Region"),
    ("GE-MM", "Mtskheta-Mtianeti", "Region"),
    ("GE-RL", "Rach'a-Lechkhumi-Kvemo Svaneti", "Region"),
    ("GE-SJ", "Samtskhe-Javakheti", "Region"),
    ("GE-SK", "Shida Kartli", "Region"),
    ("GE-SZ", "Samegrelo-Zemo Svaneti", "Region"),
    ("GE-TB", "Tbilisi", "City"),
    ("GH-AA", "Greater Accra", "Region"),
    ("GH-AF", "Ahafo", "Region"),
    ("GH-AH", "Ashanti", "Region"),
    ("GH-BE", "Bono East", "Region"),
    ("GH-BO", "Bono", "Region"),
    ("GH-CP", "Central", "Region"),
    ("GH-EP", "Eastern", "Region"),
    ("GH-NE", "North East", "Region"),
    ("GH-NP", "Northern", "Region"),
    ("GH-OT", "Oti", "Region"),
    ("GH-SV", "Savannah", "Region"),
    ("GH-TV", "Volta", "Region"),
    ("GH-UE", "Upper East", "Region"),
    ("GH-UW", "Upper West", "Region"),
    ("GH-WN", "Western North", "Region"),
    ("GH-WP", "Western", "Region"),
    ("GL-AV", "Avannaata Kommunia", "Municipality"),
    ("GL-KU", "Kommune Kujalleq", "Municipality"),
    ("GL-QE", "Qeqqata Kommunia", "Municipality"),
    ("GL-QT", "Kommune Qeqertalik", "Municipality"),
    ("GL-SM", "Kommuneqarfik Sermersooq", "Municipality"),
    ("GM-B", "Banjul", "City"),
    ("GM-L", "Lower River", "Division"),
    ("GM-M", "Central River", "Division"),
    ("GM-N", "North Bank", "Division"),
    ("GM-U", "Upper River", "Division"),
    ("GM-W", "Western", "Division"),
    ("GN-B", "Boké", "Administrative region"),
    ("GN-BE", "Beyla", "Prefecture"),
    ("GN-BF", "Boffa", "Prefecture"),
    ("GN-BK", "Boké", "Prefecture"),
    ("GN-C", "Conakry", "Governorate"),
    ("GN-CO", "Coyah", "Prefecture"),
    ("GN-D", "Kindia", "Administrative region"),
    ("GN-DB", "Dabola", "Prefecture"),
    ("GN-DI", "Dinguiraye", "Prefecture"),
    ("GN-DL", "Dalaba", "Prefecture"),
    ("GN-DU", "Dubréka", "Prefecture"),
    ("GN-F", "Faranah", "Administrative region"),
    ("GN-FA", "Faranah", "Prefecture"),
    ("GN-FO", "Forécariah", "Prefecture"),
    ("GN-FR", "Fria", "Prefecture"),
    ("GN-GA", "Gaoual", "Prefecture"),
    ("GN-GU", "Guékédou", "Prefecture"),
    ("GN-K", "Kankan", "Administrative region"),
    ("GN-KA", "Kankan", "Prefecture"),
    ("GN-KB", "Koubia", "Prefecture"),
    ("GN-KD", "Kindia", "Prefecture"),
    ("GN-KE", "Kérouané", "Prefecture"),
    ("GN-KN", "Koundara", "Prefecture"),
    ("GN-KO", "Kouroussa", "Prefecture"),
    ("GN-KS", "Kissidougou", "Prefecture"),
    ("GN-L", "Labé", "Administrative region"),
    ("GN-LA", "Labé", "Prefecture"),
    ("GN-LE", "Lélouma", "Prefecture"),
    ("GN-LO", "Lola", "Prefecture"),
    ("GN-M", "Mamou", "Administrative region"),
    ("GN-MC", "Macenta", "Prefecture"),
    ("GN-MD", "Mandiana", "Prefecture"),
    ("GN-ML", "Mali", "Prefecture"),
    ("GN-MM", "Mamou", "Prefecture"),
    ("GN-N", "Nzérékoré", "Administrative region"),
    ("GN-NZ", "Nzérékoré", "Prefecture"),
    ("GN-PI", "Pita", "Prefecture"),
    ("GN-SI", "Siguiri", "Prefecture"),
    ("GN-TE", "Télimélé", "Prefecture"),
    ("GN-TO", "Tougué", "Prefecture"),
    ("GN-YO", "Yomou", "Prefecture"),
    ("GQ-AN", "Annobon", "Province"),
    ("GQ-BN", "Bioko Nord", "Province"),
    ("GQ-BS", "Bioko Sud", "Province"),
    ("GQ-C", "Região Continental", "Region"),
    ("GQ-CS", "Centro Sud", "Province"),
    ("GQ-DJ", "Djibloho", "Province"),
    ("GQ-I", "Região Insular", "Region"),
    ("GQ-KN", "Kié-Ntem", "Province"),
    ("GQ-LI", "Litoral", "Province"),
    ("GQ-WN", "Wele-Nzas", "Province"),
    ("GR-69", "Ágion Óros", "Self-governed part"),
    ("GR-A", "Anatolikí Makedonía kai Thráki", "Administrative region"),
    ("GR-B", "Kentrikí Makedonía", "Administrative region"),
    ("GR-C", "Dytikí Makedonía", "Administrative region"),
    ("GR-D", "Ípeiros", "Administrative region"),
    ("GR-E", "Thessalía", "Administrative region"),
    ("GR-F", "Ionía Nísia", "Administrative region"),
    ("GR-G", "Dytikí Elláda", "Administrative region"),
    ("GR-H", "Stereá Elláda", "Administrative region"),
    ("GR-I", "Attikí", "Administrative region"),
    ("GR-J", "Pelopónnisos", "Administrative region"),
    ("GR-K", "Vóreio Aigaío", "Administrative region"),
    ("GR-L", "Nótio Aigaío", "Administrative region"),
    ("GR-M", "Kríti", "Administrative region"),
    ("GT-AV", "Alta Verapaz", "Department"),
    ("GT-BV", "Baja Verapaz", "Department"),
    ("GT-CM", "Chimaltenango", "Department"),
    ("GT-CQ", "Chiquimula", "Department"),
    ("GT-ES", "Escuintla", "Department"),
    ("GT-GU", "Guatemala", "Department"),
    ("GT-HU", "Huehuetenango", "Department"),
    ("GT-IZ", "Izabal", "Department"),
    ("GT-JA", "Jalapa", "Department"),
    ("GT-JU", "Jutiapa", "Department"),
    ("GT-PE", "Petén", "Department"),
    ("GT-PR", "El Progreso", "Department"),
    ("GT-QC", "Quiché", "Department"),
    ("GT-QZ", "Quetzaltenango", "Department"),
    ("GT-RE", "Retalhuleu", "Department"),
    ("GT-SA", "Sacatepéquez", "Department"),
    ("GT-SM", "San Marcos", "Department"),
    ("GT-SO", "Sololá", "Department"),
    ("GT-SR", "Santa Rosa", "Department"),
    ("GT-SU", "Suchitepéquez", "Department"),
    ("GT-TO", "Totonicapán", "Department"),
    ("GT-ZA", "Zacapa", "Department"),
    ("GW-BA", "Bafatá", "Region"),
    ("GW-BL", "Bolama / Bijagós", "Region"),
    ("GW-BM", "Biombo", "Region"),
    ("GW-BS", "Bissau", "Autonomous sector"),
    ("GW-CA", "Cacheu", "Region"),
    ("GW-GA", "Gabú", "Region"),
    ("GW-L", "Leste", "Province"),
    ("GW-N", "Norte", "Province"),
    ("GW-OI", "Oio", "Region"),
    ("GW-QU", "Quinara", "Region"),
    ("GW-S", "Sul", "Province"),
    ("GW-TO", "Tombali", "Region"),
    ("GY-BA", "Barima-Waini", "Region"),
    ("GY-CU", "Cuyuni-Mazaruni", "Region"),
    ("GY-DE", "Demerara-Mahaica", "Region"),
    ("GY-EB", "East Berbice-Corentyne", "Region"),
    ("GY-ES", "Essequibo Islands-West Demerara", "Region"),
    ("GY-MA", "Mahaica-Berbice", "Region"),
    ("GY-PM", "Pomeroon-Supenaam", "Region"),
    ("GY-PT", "Potaro-Siparuni", "Region"),
    ("GY-UD", "Upper Demerara-Berbice", "Region"),
    ("GY-UT", "Upper Takutu-Upper Essequibo", "Region"),
    ("HN-AT", "Atlántida", "Department"),
    ("HN-CH", "Choluteca", "Department"),
    ("HN-CL", "Colón", "Department"),
    ("HN-CM", "Comayagua", "Department"),
    ("HN-CP", "Copán", "Department"),
    ("HN-CR", "Cortés", "Department"),
    ("HN-EP", "El Paraíso", "Department"),
    ("HN-FM", "Francisco Morazán", "Department"),
    ("HN-GD", "Gracias a Dios", "Department"),
    ("HN-IB", "Islas de la Bahía", "Department"),
    ("HN-IN", "Intibucá", "Department"),
    ("HN-LE", "Lempira", "Department"),
    ("HN-LP", "La Paz", "Department"),
    ("HN-OC", "Ocotepeque", "Department"),
    ("HN-OL", "Olancho", "Department"),
    ("HN-SB", "Santa Bárbara", "Department"),
    ("HN-VA", "Valle", "Department"),
    ("HN-YO", "Yoro", "Department"),
    ("HR-01", "Zagrebačka županija", "County"),
    ("HR-02", "Krapinsko-zagorska županija", "County"),
    ("HR-03", "Sisačko-moslavačka županija", "County"),
    ("HR-04", "Karlovačka županija", "County"),
    ("HR-05", "Varaždinska županija", "County"),
    ("HR-06", "Koprivničko-križevačka županija", "County"),
    ("HR-07", "Bjelovarsko-bilogorska županija", "County"),
    ("HR-08", "Primorsko-goranska županija", "County"),
    ("HR-09", "Ličko-senjska županija", "County"),
    ("HR-10", "Virovitičko-podravska županija", "County"),
    ("HR-11", "Požeško-slavonska županija", "County"),
    ("HR-12", "Brodsko-posavska županija", "County"),
    ("HR-13", "Zadarska županija", "County"),
    ("HR-14", "Osječko-baranjska županija", "County"),
    ("HR-15", "Šibensko-kninska županija", "County"),
    ("HR-16", "Vukovarsko-srijemska županija", "County"),
    ("HR-17", "Splitsko-dalmatinska županija", "County"),
    ("HR-18", "Istarska županija", "County"),
    ("HR-19", "Dubrovačko-neretvanska županija", "County"),
    ("HR-20", "Međimurska županija", "County"),
    ("HR-21", "Grad Zagreb", "City"),
    ("HT-AR", "Artibonite", "Department"),
    ("HT-CE", "Centre", "Department"),
    ("HT-GA", "Grandans", "Department"),
    ("HT-ND", "Nord", "Department"),
    ("HT-NE", "Nord-Est", "Department"),
    ("HT-NI", "Nip", "Department"),
    ("HT-NO", "Nord-Ouest", "Department"),
    ("HT-OU", "Lwès", "Department"),
    ("HT-SD", "Sid", "Department"),
    ("HT-SE", "Sidès", "Department"),
    ("HU-BA", "Baranya", "County"),
    ("HU-BC", "Békéscsaba", "City with county rights"),
    ("HU-BE", "Békés", "County"),
    ("HU-BK", "Bács-Kiskun", "County"),
    ("HU-BU", "Budapest", "Capital city"),
    ("HU-BZ", "Borsod-Abaúj-Zemplén", "County"),
    ("HU-CS", "Csongrád", "County"),
    ("HU-DE", "Debrecen", "City with county rights"),
    ("HU-DU", "Dunaújváros", "City with county rights"),
    ("HU-EG", "Eger", "City with county rights"),
    ("HU-ER", "Érd", "City with county rights"),
    ("HU-FE", "Fejér", "County"),
    ("HU-GS", "Győr-Moson-Sopron", "County"),
    ("HU-GY", "Győr", "City with county rights"),
    ("HU-HB", "Hajdú-Bihar", "County"),
    ("HU-HE", "Heves", "County"),
    ("HU-HV", "Hódmezővásárhely", "City with county rights"),
    ("HU-JN", "Jász-Nagykun-Szolnok", "County"),
    ("HU-KE", "Komárom-Esztergom", "County"),
    ("HU-KM", "Kecskemét", "City with county rights"),
    ("HU-KV", "Kaposvár", "City with county rights"),
    ("HU-MI", "Miskolc", "City with county rights"),
    ("HU-NK", "Nagykanizsa", "City with county rights"),
    ("HU-NO", "Nógrád", "County"),
    ("HU-NY", "Nyíregyháza", "City with county rights"),
    ("HU-PE", "Pest", "County"),
    ("HU-PS", "Pécs", "City with county rights"),
    ("HU-SD", "Szeged", "City with county rights"),
    ("HU-SF", "Székesfehérvár", "City with county rights"),
    ("HU-SH", "Szombathely", "City with county rights"),
    ("HU-SK", "Szolnok", "City with county rights"),
    ("HU-SN", "Sopron", "City with county rights"),
    ("HU-SO", "Somogy", "County"),
    ("HU-SS", "Szekszárd", "City with county rights"),
    ("HU-ST", "Salgótarján", "City with county rights"),
    ("HU-SZ", "Szabolcs-Szatmár-Bereg", "County"),
    ("HU-TB", "Tatabánya", "City with county rights"),
    ("HU-TO", "Tolna", "County"),
    ("HU-VA", "Vas", "County"),
    ("HU-VE", "Veszprém", "County"),
    ("HU-VM", "Veszprém", "City with county rights"),
    ("HU-ZA", "Zala", "County"),
    ("HU-ZE", "Zalaegerszeg", "City with county rights"),
    ("ID-AC", "Aceh", "Province"),
    ("ID-BA", "Bali", "Province"),
    ("ID-BB", "Kepulauan Bangka Belitung", "Province"),
    ("ID-BE", "Bengkulu", "Province"),
    ("ID-BT", "Banten", "Province"),
    ("ID-GO", "Gorontalo", "Province"),
    ("ID-JA", "Jambi", "Province"),
    ("ID-JB", "Jawa Barat", "Province"),
    ("ID-JI", "Jawa Timur", "Province"),
    ("ID-JK", "Jakarta Raya", "Capital district"),
    ("ID-JT", "Jawa Tengah", "Province"),
    ("ID-JW", "Jawa", "Geographical unit"),
    ("ID-KA", "Kalimantan", "Geographical unit"),
    ("ID-KB", "Kalimantan Barat", "Province"),
    ("ID-KI", "Kalimantan Timur", "Province"),
    ("ID-KR", "Kepulauan Riau", "Province"),
    ("ID-KS", "Kalimantan Selatan", "Province"),
    ("ID-KT", "Kalimantan Tengah", "Province"),
    ("ID-KU", "Kalimantan Utara", "Province"),
    ("ID-LA", "Lampung", "Province"),
    ("ID-MA", "Maluku", "Province"),
    ("ID-ML", "Maluku", "Geographical unit"),
    ("ID-MU", "Maluku Utara", "Province"),
    ("ID-NB", "Nusa Tenggara Barat", "Province"),
    ("ID-NT", "Nusa Tenggara Timur", "Province"),
    ("ID-NU", "Nusa Tenggara", "Geographical unit"),
    ("ID-PA", "Papua", "Province"),
    ("ID-PB", "Papua Barat", "Province"),
    ("ID-PP", "Papua", "Geographical unit"),
    ("ID-RI", "Riau", "Province"),
    ("ID-SA", "Sulawesi Utara", "Province"),
    ("ID-SB", "Sumatera Barat", "Province"),
    ("ID-SG", "Sulawesi Tenggara", "Province"),
    ("ID-SL", "Sulawesi", "Geographical unit"),
    ("ID-SM", "Sumatera", "Geographical unit"),
    ("ID-SN", "Sulawesi Selatan", "Province"),
    ("ID-SR", "Sulawesi Barat", "Province"),
    ("ID-SS", "Sumatera Selatan", "Province"),
    ("ID-ST", "Sulawesi Tengah", "Province"),
    ("ID-SU", "Sumatera Utara", "Province"),
    ("ID-YO", "Yogyakarta", "Special region"),
    ("IE-C", "Connaught", "Province"),
    ("IE-CE", "Clare", "County"),
    ("IE-CN", "Cavan", "County"),
    ("IE-CO", "Cork", "County"),
    ("IE-CW", "Carlow", "County"),
    ("IE-D", "Dublin", "County"),
    ("IE-DL", "Donegal", "County"),
    ("IE-G", "Galway", "County"),
    ("IE-KE", "Kildare", "County"),
    ("IE-KK", "Kilkenny", "County"),
    ("IE-KY", "Kerry", "County"),
    ("IE-L", "Leinster", "Province"),
    ("IE-LD", "Longford", "County"),
    ("IE-LH", "Louth", "County"),
    ("IE-LK", "Limerick", "County"),
    ("IE-LM", "Leitrim", "County"),
    ("IE-LS", "Laois", "County"),
    ("IE-M", "Munster", "Province"),
    ("IE-MH", "Meath", "County"),
    ("IE-MN", "Monaghan", "County"),
    ("IE-MO", "Mayo", "County"),
    ("IE-OY", "Offaly", "County"),
    ("IE-RN", "Roscommon", "County"),
    ("IE-SO", "Sligo", "County"),
    ("IE-TA", "Tipperary", "County"),
    ("IE-U", "Ulster", "Province"),
    ("IE-WD", "Waterford", "County"),
    ("IE-WH", "Westmeath", "County"),
    ("IE-WW", "Wicklow", "County"),
    ("IE-WX", "Wexford", "County"),
    ("IL-D", "Al Janūbī", "District"),
    ("IL-HA", "H̱efa", "District"),
    ("IL-JM", "Al Quds", "District"),
    ("IL-M", "Al Awsaţ", "District"),
    ("IL-TA", "Tall Abīb", "District"),
    ("IL-Z", "Ash Shamālī", "District"),
    ("IN-AN", "Andaman and Nicobar Islands", "Union territory"),
    ("IN-AP", "Andhra Pradesh", "State"),
    ("IN-AR", "Arunāchal Pradesh", "State"),
    ("IN-AS", "Assam", "State"),
    ("IN-BR", "Bihār", "State"),
    ("IN-CH", "Chandīgarh", "Union territory"),
    ("IN-CT", "Chhattīsgarh", "State"),
    ("IN-DH", "Dādra and Nagar Haveli and Damān and Diu", "Union territory"),
    ("IN-DL", "Delhi", "Union territory"),
    ("IN-GA", "Goa", "State"),
    ("IN-GJ", "Gujarāt", "State"),
    ("IN-HP", "Himāchal Pradesh", "State"),
    ("IN-HR", "Haryāna", "State"),
    ("IN-JH", "Jhārkhand", "State"),
    ("IN-JK", "Jammu and Kashmīr", "Union territory"),
    ("IN-KA", "Karnātaka", "State"),
    ("IN-KL", "Kerala", "State"),
    ("IN-LA", "Ladākh", "Union territory"),
    ("IN-LD", "Lakshadweep", "Union territory"),
    ("IN-MH", "Mahārāshtra", "State"),
    ("IN-ML", "Meghālaya", "State"),
    ("IN-MN", "Manipur", "State"),
    ("IN-MP", "Madhya Pradesh", "State"),
    ("IN-MZ", "Mizoram", "State"),
    ("IN-NL", "Nāgāland", "State"),
    ("IN-OR", "Odisha", "State"),
    ("IN-PB", "Punjab", "State"),
    ("IN-PY", "Puducherry", "Union territory"),
    ("IN-RJ", "Rājasthān", "State"),
    ("IN-SK", "Sikkim", "State"),
    ("IN-TG", "Telangāna", "State"),
    ("IN-TN", "Tamil Nādu", "State"),
    ("IN-TR", "Tripura", "State"),
    ("IN-UP", "Uttar Pradesh", "State"),
    ("IN-UT", "Uttarākhand", "State"),
    ("IN-WB", "West Bengal", "State"),
    ("IQ-AN", "Al Anbār", "Governorate"),
    ("IQ-AR", "Arbīl", "Governorate"),
    ("IQ-BA", "Al Başrah", "Governorate"),
    ("IQ-BB", "Bābil", "Governorate"),
    ("IQ-BG", "Baghdād", "Governorate"),
    ("IQ-DA", "Dahūk", "Governorate"),
    ("IQ-DI", "Diyālá", "Governorate"),
    ("IQ-DQ", "Dhī Qār", "Governorate"),
    ("IQ-KA", "Karbalā’", "Governorate"),
    ("IQ-KI", "Kirkūk", "Governorate"),
    ("IQ-MA", "Maysān", "Governorate"),
    ("IQ-MU", "Al Muthanná", "Governorate"),
    ("IQ-NA", "An Najaf", "Governorate"),
    ("IQ-NI", "Nīnawá", "Governorate"),
    ("IQ-QA", "Al Qādisīyah", "Governorate"),
    ("IQ-SD", "Şalāḩ ad Dīn", "Governorate"),
    ("IQ-SU", "As Sulaymānīyah", "Governorate"),
    ("IQ-WA", "Wāsiţ", "Governorate"),
    ("IR-00", "Markazī", "Province"),
    ("IR-01", "Gīlān", "Province"),
    ("IR-02", "Māzandarān", "Province"),
    ("IR-03", "Āz̄ārbāyjān-e Shārqī", "Province"),
    ("IR-04", "Āz̄ārbāyjān-e Ghārbī", "Province"),
    ("IR-05", "Kermānshāh", "Province"),
    ("IR-06", "Khūzestān", "Province"),
    ("IR-07", "Fārs", "Province"),
    ("IR-08", "Kermān", "Province"),
    ("IR-09", "Khorāsān-e Raẕavī", "Province"),
    ("IR-10", "Eşfahān", "Province"),
    ("IR-11", "Sīstān va Balūchestān", "Province"),
    ("IR-12", "Kordestān", "Province"),
    ("IR-13", "Hamadān", "Province"),
    ("IR-14", "Chahār Maḩāl va Bakhtīārī", "Province"),
    ("IR-15", "Lorestān", "Province"),
    ("IR-16", "Īlām", "Province"),
    ("IR-17", "Kohgīlūyeh va Bowyer Aḩmad", "Province"),
    ("IR-18", "Būshehr", "Province"),
    ("IR-19", "Zanjān", "Province"),
    ("IR-20", "Semnān", "Province"),
    ("IR-21", "Yazd", "Province"),
    ("IR-22", "Hormozgān", "Province"),
    ("IR-23", "Tehrān", "Province"),
    ("IR-24", "Ardabīl", "Province"),
    ("IR-25", "Qom", "Province"),
    ("IR-26", "Qazvīn", "Province"),
    ("IR-27", "Golestān", "Province"),
    ("IR-28", "Khorāsān-e Shomālī", "Province"),
    ("IR-29", "Khorāsān-e Jonūbī", "Province"),
    ("IR-30", "Alborz", "Province"),
    ("IS-1", "Höfuðborgarsvæði", "Region"),
    ("IS-2", "Suðurnes", "Region"),
    ("IS-3", "Vesturland", "Region"),
    ("IS-4", "Vestfirðir", "Region"),
    ("IS-5", "Norðurland vestra", "Region"),
    ("IS-6", "Norðurland eystra", "Region"),
    ("IS-7", "Austurland", "Region"),
    ("IS-8", "Suðurland", "Region"),
    ("IS-AKH", "Akrahreppur", "Municipality"),
    ("IS-AKN", "Akraneskaupstaður", "Municipality"),
    ("IS-AKU", "Akureyrarbær", "Municipality"),
    ("IS-ARN", "Árneshreppur", "Municipality"),
    ("IS-ASA", "Ásahreppur", "Municipality"),
    ("IS-BFJ", "Borgarfjarðarhreppur", "Municipality"),
    ("IS-BLA", "Bláskógabyggð", "Municipality"),
    ("IS-BLO", "Blönduósbær", "Municipality"),
    ("IS-BOG", "Borgarbyggð", "Municipality"),
    ("IS-BOL", "Bolungarvíkurkaupstaður", "Municipality"),
    ("IS-DAB", "Dalabyggð", "Municipality"),
    ("IS-DAV", "Dalvíkurbyggð", "Municipality"),
    ("IS-DJU", "Djúpavogshreppur", "Municipality"),
    ("IS-EOM", "Eyja- og Miklaholtshreppur", "Municipality"),
    ("IS-EYF", "Eyjafjarðarsveit", "Municipality"),
    ("IS-FJD", "Fjarðabyggð", "Municipality"),
    ("IS-FJL", "Fjallabyggð", "Municipality"),
    ("IS-FLA", "Flóahreppur", "Municipality"),
    ("IS-FLD", "Fljótsdalshérað", "Municipality"),
    ("IS-FLR", "Fljótsdalshreppur", "Municipality"),
    ("IS-GAR", "Garðabær", "Municipality"),
    ("IS-GOG", "Grímsnes- og Grafningshreppur", "Municipality"),
    ("IS-GRN", "Grindavíkurbær", "Municipality"),
    ("IS-GRU", "Grundarfjarðarbær", "Municipality"),
    ("IS-GRY", "Grýtubakkahreppur", "Municipality"),
    ("IS-HAF", "Hafnarfjarðarkaupstaður", "Municipality"),
    ("IS-HEL", "Helgafellssveit", "Municipality"),
    ("IS-HRG", "Hörgársveit", "Municipality"),
    ("IS-HRU", "Hrunamannahreppur", "Municipality"),
    ("IS-HUT", "Húnavatnshreppur", "Municipality"),
    ("IS-HUV", "Húnaþing vestra", "Municipality"),
    ("IS-HVA", "Hvalfjarðarsveit", "Municipality"),
    ("IS-HVE", "Hveragerðisbær", "Municipality"),
    ("IS-ISA", "Ísafjarðarbær", "Municipality"),
    ("IS-KAL", "Kaldrananeshreppur", "Municipality"),
    ("IS-KJO", "Kjósarhreppur", "Municipality"),
    ("IS-KOP", "Kópavogsbær", "Municipality"),
    ("IS-LAN", "Langanesbyggð", "Municipality"),
    ("IS-MOS", "Mosfellsbær", "Municipality"),
    ("IS-MYR", "Mýrdalshreppur", "Municipality"),
    ("IS-NOR", "Norðurþing", "Municipality"),
    ("IS-RGE", "Rangárþing eystra", "Municipality"),
    ("IS-RGY", "Rangárþing ytra", "Municipality"),
    ("IS-RHH", "Reykhólahreppur", "Municipality"),
    ("IS-RKN", "Reykjanesbær", "Municipality"),
    ("IS-RKV", "Reykjavíkurborg", "Municipality"),
    ("IS-SBH", "Svalbarðshreppur", "Municipality"),
    ("IS-SBT", "Svalbarðsstrandarhreppur", "Municipality"),
    ("IS-SDN", "Suðurnesjabær", "Municipality"),
    ("IS-SDV", "Súðavíkurhreppur", "Municipality"),
    ("IS-SEL", "Seltjarnarnesbær", "Municipality"),
    ("IS-SEY", "Seyðisfjarðarkaupstaður", "Municipality"),
    ("IS-SFA", "Sveitarfélagið Árborg", "Municipality"),
    ("IS-SHF", "Sveitarfélagið Hornafjörður", "Municipality"),
    ("IS-SKF", "Skaftárhreppur", "Municipality"),
    ("IS-SKG", "Skagabyggð", "Municipality"),
    ("IS-SKO", "Skorradalshreppur", "Municipality"),
    ("IS-SKU", "Skútustaðahreppur", "Municipality"),
    ("IS-SNF", "Snæfellsbær", "Municipality"),
    ("IS-SOG", "Skeiða- og Gnúpverjahreppur", "Municipality"),
    ("IS-SOL", "Sveitarfélagið Ölfus", "Municipality"),
    ("IS-SSF", "Sveitarfélagið Skagafjörður", "Municipality"),
    ("IS-SSS", "Sveitarfélagið Skagaströnd", "Municipality"),
    ("IS-STR", "Strandabyggð", "Municipality"),
    ("IS-STY", "Stykkishólmsbær", "Municipality"),
    ("IS-SVG", "Sveitarfélagið Vogar", "Municipality"),
    ("IS-TAL", "Tálknafjarðarhreppur", "Municipality"),
    ("IS-THG", "Þingeyjarsveit", "Municipality"),
    ("IS-TJO", "Tjörneshreppur", "Municipality"),
    ("IS-VEM", "Vestmannaeyjabær", "Municipality"),
    ("IS-VER", "Vesturbyggð", "Municipality"),
    ("IS-VOP", "Vopnafjarðarhreppur", "Municipality"),
    ("IT-21", "Piemonte", "Region"),
    ("IT-23", "Val d'Aoste", "Autonomous region"),
    ("IT-25", "Lombardia", "Region"),
    ("IT-32", "Trentino-Alto Adige", "Autonomous region"),
    ("IT-34", "Veneto", "Region"),
    ("IT-36", "Friuli Venezia Giulia", "Autonomous region"),
    ("IT-42", "Liguria", "Region"),
    ("IT-45", "Emilia-Romagna", "Region"),
    ("IT-52", "Toscana", "Region"),
    ("IT-55", "Umbria", "Region"),
    ("IT-57", "Marche", "Region"),
    ("IT-62", "Lazio", "Region"),
    ("IT-65", "Abruzzo", "Region"),
    ("IT-67", "Molise", "Region"),
    ("IT-72", "Campania", "Region"),
    ("IT-75", "Puglia", "Region"),
    ("IT-77", "Basilicata", "Region"),
    ("IT-78", "Calabria", "Region"),
    ("IT-82", "Sicilia", "Autonomous region"),
    ("IT-88", "Sardegna", "Autonomous region"),
    ("IT-AG", "Agrigento", "Free municipal consortium"),
    ("IT-AL", "Alessandria", "Province"),
    ("IT-AN", "Ancona", "Province"),
    ("IT-AP", "Ascoli Piceno", "Province"),
    ("IT-AQ", "L'Aquila", "Province"),
    ("IT-AR", "Arezzo", "Province"),
    ("IT-AT", "Asti", "Province"),
    ("IT-AV", "Avellino", "Province"),
    ("IT-BA", "Bari", "Metropolitan city"),
    ("IT-BG", "Bergamo", "Province"),
    ("IT-BI", "Biella", "Province"),
    ("IT-BL", "Belluno", "Province"),
    ("IT-BN", "Benevento", "Province"),
    ("IT-BO", "Bologna", "Metropolitan city"),
    ("IT-BR", "Brindisi", "Province"),
    ("IT-BS", "Brescia", "Province"),
    ("IT-BT", "Barletta-Andria-Trani", "Province"),
    ("IT-BZ", "Bolzano", "Autonomous province"),
    ("IT-CA", "Cagliari", "Metropolitan city"),
    ("IT-CB", "Campobasso", "Province"),
    ("IT-CE", "Caserta", "Province"),
    ("IT-CH", "Chieti", "Province"),
    ("IT-CL", "Caltanissetta", "Free municipal consortium"),
    ("IT-CN", "Cuneo", "Province"),
    ("IT-CO", "Como", "Province"),
    ("IT-CR", "Cremona", "Province"),
    ("IT-CS", "Cosenza", "Province"),
    ("IT-CT", "Catania", "Metropolitan city"),
    ("IT-CZ", "Catanzaro", "Province"),
    ("IT-EN", "Enna", "Free municipal consortium"),
    ("IT-FC", "Forlì-Cesena", "Province"),
    ("IT-FE", "Ferrara", "Province"),
    ("IT-FG", "Foggia", "Province"),
    ("IT-FI", "Firenze", "Metropolitan city"),
    ("IT-FM", "Fermo", "Province"),
    ("IT-FR", "Frosinone", "Province"),
    ("IT-GE", "Genova", "Metropolitan city"),
    ("IT-GO", "Gorizia", "Decentralized regional entity"),
    ("IT-GR", "Grosseto", "Province"),
    ("IT-IM", "Imperia", "Province"),
    ("IT-IS", "Isernia", "Province"),
    ("IT-KR", "Crotone", "Province"),
    ("IT-LC", "Lecco", "Province"),
    ("IT-LE", "Lecce", "Province"),
    ("IT-LI", "Livorno", "Province"),
    ("IT-LO", "Lodi", "Province"),
    ("IT-LT", "Latina", "Province"),
    ("IT-LU", "Lucca", "Province"),
    ("IT-MB", "Monza e Brianza", "Province"),
    ("IT-MC", "Macerata", "Province"),
    ("IT-ME", "Messina", "Metropolitan city"),
    ("IT-MI", "Milano", "Metropolitan city"),
    ("IT-MN", "Mantova", "Province"),
    ("IT-MO", "Modena", "Province"),
    ("IT-MS", "Massa-Carrara", "Province"),
    ("IT-MT", "Matera", "Province"),
    ("IT-NA", "Napoli", "Metropolitan city"),
    ("IT-NO", "Novara", "Province"),
    ("IT-NU", "Nuoro", "Province"),
    ("IT-OR", "Oristano", "Province"),
    ("IT-PA", "Palermo", "Metropolitan city"),
    ("IT-PC", "Piacenza", "Province"),
    ("IT-PD", "Padova", "Province"),
    ("IT-PE", "Pescara", "Province"),
    ("IT-PG", "Perugia", "Province"),
    ("IT-PI", "Pisa", "Province"),
    ("IT-PN", "Pordenone", "Decentralized regional entity"),
    ("IT-PO", "Prato", "Province"),
    ("IT-PR", "Parma", "Province"),
    ("IT-PT", "Pistoia", "Province"),
    ("IT-PU", "Pesaro e Urbino", "Province"),
    ("IT-PV", "Pavia", "Province"),
    ("IT-PZ", "Potenza", "Province"),
    ("IT-RA", "Ravenna", "Province"),
    ("IT-RC", "Reggio Calabria", "Metropolitan city"),
    ("IT-RE", "Reggio Emilia", "Province"),
    ("IT-RG", "Ragusa", "Free municipal consortium"),
    ("IT-RI", "Rieti", "Province"),
    ("IT-RM", "Roma", "Metropolitan city"),
    ("IT-RN", "Rimini", "Province"),
    ("IT-RO", "Rovigo", "Province"),
    ("IT-SA", "Salerno", "Province"),
    ("IT-SI", "Siena", "Province"),
    ("IT-SO", "Sondrio", "Province"),
    ("IT-SP", "La Spezia", "Province"),
    ("IT-SR", "Siracusa", "Free municipal consortium"),
    ("IT-SS", "Sassari", "Province"),
    ("IT-SU", "Sud Sardegna", "Province"),
    ("IT-SV", "Savona", "Province"),
    ("IT-TA", "Taranto", "Province"),
    ("IT-TE", "Teramo", "Province"),
    ("IT-TN", "Trento", "Autonomous province"),
    ("IT-TO", "Torino", "Metropolitan city"),
    ("IT-TP", "Trapani", "Free municipal consortium"),
    ("IT-TR", "Terni", "Province"),
    ("IT-TS", "Trieste", "Decentralized regional entity"),
    ("IT-TV", "Treviso", "Province"),
    ("IT-UD", "Udine", "Decentralized regional entity"),
    ("IT-VA", "Varese", "Province"),
    ("IT-VB", "Verbano-Cusio-Ossola", "Province"),
    ("IT-VC", "Vercelli", "Province"),
    ("IT-VE", "Venezia", "Metropolitan city"),
    ("IT-VI", "Vicenza", "Province"),
    ("IT-VR", "Verona", "Province"),
    ("IT-VT", "Viterbo", "Province"),
    ("IT-VV", "Vibo Valentia", "Province"),
    ("JM-01", "Kingston", "Parish"),
    ("JM-02", "Saint Andrew", "Parish"),
    ("JM-03", "Saint Thomas", "Parish"),
    ("JM-04", "Portland", "Parish"),
    ("JM-05", "Saint Mary", "Parish"),
    ("JM-06", "Saint Ann", "Parish"),
    ("JM-07", "Trelawny", "Parish"),
    ("JM-08", "Saint James", "Parish"),
    ("JM-09", "Hanover", "Parish"),
    ("JM-10", "Westmoreland", "Parish"),
    ("JM-11", "Saint Elizabeth", "Parish"),
    ("JM-12", "Manchester", "Parish"),
    ("JM-13", "Clarendon", "Parish"),
    ("JM-14", "Saint Catherine", "Parish"),
    ("JO-AJ", "‘Ajlūn", "Governorate"),
    ("JO-AM", "Al ‘A̅şimah", "Governorate"),
    ("JO-AQ", "Al ‘Aqabah", "Governorate"),
    ("JO-AT", "Aţ Ţafīlah", "Governorate"),
    ("JO-AZ", "Az Zarqā’", "Governorate"),
    ("JO-BA", "Al Balqā’", "Governorate"),
    ("JO-IR", "Irbid", "Governorate"),
    ("JO-JA", "Jarash", "Governorate"),
    ("JO-KA", "Al Karak", "Governorate"),
    ("JO-MA", "Al Mafraq", "Governorate"),
    ("JO-MD", "Mādabā", "Governorate"),
    ("JO-MN", "Ma‘ān", "Governorate"),
    ("JP-01", "Hokkaido", "Prefecture"),
    ("JP-02", "Aomori", "Prefecture"),
    ("JP-03", "Iwate", "Prefecture"),
    ("JP-04", "Miyagi", "Prefecture"),
    ("JP-05", "Akita", "Prefecture"),
    ("JP-06", "Yamagata", "Prefecture"),
    ("JP-07", "Fukushima", "Prefecture"),
    ("JP-08", "Ibaraki", "Prefecture"),
    ("JP-09", "Tochigi", "Prefecture"),
    ("JP-10", "Gunma", "Prefecture"),
    ("JP-11", "Saitama", "Prefecture"),
    ("JP-12", "Chiba", "Prefecture"),
    ("JP-13", "Tokyo", "Prefecture"),
    ("JP-14", "Kanagawa", "Prefecture"),
    ("JP-15", "Niigata", "Prefecture"),
    ("JP-16", "Toyama", "Prefecture"),
    ("JP-17", "Ishikawa", "Prefecture"),
    ("JP-18", "Fukui", "Prefecture"),
    ("JP-19", "Yamanashi", "Prefecture"),
    ("JP-20", "Nagano", "Prefecture"),
    ("JP-21", "Gifu", "Prefecture"),
    ("JP-22", "Shizuoka", "Prefecture"),
    ("JP-23", "Aichi", "Prefecture"),
    ("JP-24", "Mie", "Prefecture"),
    ("JP-25", "Shiga", "Prefecture"),
    ("JP-26", "Kyoto", "Prefecture"),
    ("JP-27", "Osaka", "Prefecture"),
    ("JP-28", "Hyogo", "Prefecture"),
    ("JP-29", "Nara", "Prefecture"),
    ("JP-30", "Wakayama", "Prefecture"),
    ("JP-31", "Tottori", "Prefecture"),
    ("JP-32", "Shimane", "Prefecture"),
    ("JP-33", "Okayama", "Prefecture"),
    ("JP-34", "Hiroshima", "Prefecture"),
    ("JP-35", "Yamaguchi", "Prefecture"),
    ("JP-36", "Tokushima", "Prefecture"),
    ("JP-37", "Kagawa", "Prefecture"),
    ("JP-38", "Ehime", "Prefecture"),
    ("JP-39", "Kochi", "Prefecture"),
    ("JP-40", "Fukuoka", "Prefecture"),
    ("JP-41", "Saga", "Prefecture"),
    ("JP-42", "Nagasaki", "Prefecture"),
    ("JP-43", "Kumamoto", "Prefecture"),
    ("JP-44", "Oita", "Prefecture"),
    ("JP-45", "Miyazaki", "Prefecture"),
    ("JP-46", "Kagoshima", "Prefecture"),
    ("JP-47", "Okinawa", "Prefecture"),
    ("KE-01", "Baringo", "County"),
    ("KE-02", "Bomet", "County"),
    ("KE-03", "Bungoma", "County"),
    ("KE-04", "Busia", "County"),
    ("KE-05", "Elgeyo/Marakwet", "County"),
    ("KE-06", "Embu", "County"),
    ("KE-07", "Garissa", "County"),
    ("KE-08", "Homa Bay", "County"),
    ("KE-09", "Isiolo", "County"),
    ("KE-10", "Kajiado", "County"),
    ("KE-11", "Kakamega", "County"),
    ("KE-12", "Kericho", "County"),
    ("KE-13", "Kiambu", "County"),
    ("KE-14", "Kilifi", "County"),
    ("KE-15", "Kirinyaga", "County"),
    ("KE-16", "Kisii", "County"),
    ("KE-17", "Kisumu", "County"),
    ("KE-18", "Kitui", "County"),
    ("KE-19", "Kwale", "County"),
    ("KE-20", "Laikipia", "County"),
    ("KE-21", "Lamu", "County"),
    ("KE-22", "Machakos", "County"),
    ("KE-23", "Makueni", "County"),
    ("KE-24", "Mandera", "County"),
    ("KE-25", "Marsabit", "County"),
    ("KE-26", "Meru", "County"),
    ("KE-27", "Migori", "County"),
    ("KE-28", "Mombasa", "County"),
    ("KE-29", "Murang'a", "County"),
    ("KE-30", "Nairobi City", "County"),
    ("KE-31", "Nakuru", "County"),
    ("KE-32", "Nandi", "County"),
    ("KE-33", "Narok", "County"),
    ("KE-34", "Nyamira", "County"),
    ("KE-35", "Nyandarua", "County"),
    ("KE-36", "Nyeri", "County"),
    ("KE-37", "Samburu", "County"),
    ("KE-38", "Siaya", "County"),
    ("KE-39", "Taita/Taveta", "County"),
    ("KE-40", "Tana River", "County"),
    ("KE-41", "Tharaka-Nithi", "County"),
    ("KE-42", "Trans Nzoia", "County"),
    ("KE-43", "Turkana", "County"),
    ("KE-44", "Uasin Gishu", "County"),
    ("KE-45", "Vihiga", "County"),
    ("KE-46", "Wajir", "County"),
    ("KE-47", "West Pokot", "County"),
    ("KG-B", "Batken", "Region"),
    ("KG-C", "Chuyskaya oblast'", "Region"),
    ("KG-GB", "Bishkek Shaary", "City"),
    ("KG-GO", "Gorod Osh", "City"),
    ("KG-J", "Dzhalal-Abadskaya oblast'", "Region"),
    ("KG-N", "Naryn", "Region"),
    ("KG-O", "Osh", "Region"),
    ("KG-T", "Talas", "Region"),
    ("KG-Y", "Issyk-Kul'skaja oblast'", "Region"),
    ("KH-1", "Banteay Mean Choăy", "Province"),
    ("KH-10", "Kracheh", "Province"),
    ("KH-11", "Mondol Kiri", "Province"),
    ("KH-12", "Phnom Penh", "Autonomous municipality"),
    ("KH-13", "Preah Vihear", "Province"),
    ("KH-14", "Prey Veaeng", "Province"),
    ("KH-15", "Pousaat", "Province"),
    ("KH-16", "Rotanak Kiri", "Province"),
    ("KH-17", "Siem Reab", "Province"),
    ("KH-18", "Preah Sihanouk", "Province"),
    ("KH-19", "Stoĕng Trêng", "Province"),
    ("KH-2", "Baat Dambang", "Province"),
    ("KH-20", "Svaay Rieng", "Province"),
    ("KH-21", "Taakaev", "Province"),
    ("KH-22", "Otdar Mean Chey", "Province"),
    ("KH-23", "Kaeb", "Province"),
    ("KH-24", "Pailin", "Province"),
    ("KH-25", "Tbong Khmum", "Province"),
    ("KH-3", "Kampong Chaam", "Province"),
    ("KH-4", "Kampong Chhnang", "Province"),
    ("KH-5", "Kampong Spueu", "Province"),
    ("KH-6", "Kampong Thum", "Province"),
    ("KH-7", "Kampot", "Province"),
    ("KH-8", "Kandaal", "Province"),
    ("KH-9", "Kaoh Kong", "Province"),
    ("KI-G", "Gilbert Islands", "Group of islands (20 inhabited islands)"),
    ("KI-L", "Line Islands", "Group of islands (20 inhabited islands)"),
    ("KI-P", "Phoenix Islands", "Group of islands (20 inhabited islands)"),
    ("KM-A", "Andjouân", "Island"),
    ("KM-G", "Andjazîdja", "Island"),
    ("KM-M", "Mohéli", "Island"),
    ("KN-01", "Christ Church Nichola Town", "Parish"),
    ("KN-02", "Saint Anne Sandy Point", "Parish"),
    ("KN-03", "Saint George Basseterre", "Parish"),
    ("KN-04", "Saint George Gingerland", "Parish"),
    ("KN-05", "Saint James Windward", "Parish"),
    ("KN-06", "Saint John Capisterre", "Parish"),
    ("KN-07", "Saint John Figtree", "Parish"),
    ("KN-08", "Saint Mary Cayon", "Parish"),
    ("KN-09", "Saint Paul Capisterre", "Parish"),
    ("KN-10", "Saint Paul Charlestown", "Parish"),
    ("KN-11", "Saint Peter Basseterre", "Parish"),
    ("KN-12", "Saint Thomas Lowland", "Parish"),
    ("KN-13", "Saint Thomas Middle Island", "Parish"),
    ("KN-15", "Trinity Palmetto Point", "Parish"),
    ("KN-K", "Saint Kitts", "State"),
    ("KN-N", "Nevis", "State"),
    ("KP-01", "P'yǒngyang", "Capital city"),
    ("KP-02", "P'yǒngan-namdo", "Province"),
    ("KP-03", "P'yǒngan-bukto", "Province"),
    ("KP-04", "Chagang-do", "Province"),
    ("KP-05", "Hwanghae-namdo", "Province"),
    ("KP-06", "Hwanghae-bukto", "Province"),
    ("KP-07", "Kangweonto", "Province"),
    ("KP-08", "Hamgyǒng-namdo", "Province"),
    ("KP-09", "Hamgyǒng-bukto", "Province"),
    ("KP-10", "Ryanggang-do", "Province"),
    ("KP-13", "Raseon", "Special city"),
    ("KP-14", "Nampho", "Metropolitan city"),
    ("KR-11", "Seoul-teukbyeolsi", "Special city"),
    ("KR-26", "Busan-gwangyeoksi", "Metropolitan city"),
    ("KR-27", "Daegu-gwangyeoksi", "Metropolitan city"),
    ("KR-28", "Incheon-gwangyeoksi", "Metropolitan city"),
    ("KR-29", "Gwangju-gwangyeoksi", "Metropolitan city"),
    ("KR-30", "Daejeon-gwangyeoksi", "Metropolitan city"),
    ("KR-31", "Ulsan-gwangyeoksi", "Metropolitan city"),
    ("KR-41", "Gyeonggi-do", "Province"),
    ("KR-42", "Gangwon-do", "Province"),
    ("KR-43", "Chungcheongbuk-do", "Province"),
    ("KR-44", "Chungcheongnam-do", "Province"),
    ("KR-45", "Jeollabuk-do", "Province"),
    ("KR-46", "Jeollanam-do", "Province"),
    ("KR-47", "Gyeongsangbuk-do", "Province"),
    ("KR-48", "Gyeongsangnam-do", "Province"),
    ("KR-49", "Jeju-teukbyeoljachido", "Special self-governing province"),
    ("KR-50", "Sejong", "Special self-governing city"),
    ("KW-AH", "Al Aḩmadī", "Governorate"),
    ("KW-FA", "Al Farwānīyah", "Governorate"),
    ("KW-HA", "Ḩawallī", "Governorate"),
    ("KW-JA", "Al Jahrā’", "Governorate"),
    ("KW-KU", "Al ‘Āşimah", "Governorate"),
    ("KW-MU", "Mubārak al Kabīr", "Governorate"),
    ("KZ-AKM", "Akmolinskaja oblast'", "Region"),
    ("KZ-AKT", "Aktjubinskaja oblast'", "Region"),
    ("KZ-ALA", "Almaty", "City"),
    ("KZ-ALM", "Almatinskaja oblast'", "Region"),
    ("KZ-AST", "Nur-Sultan", "City"),
    ("KZ-ATY", "Atyrauskaja oblast'", "Region"),
    ("KZ-KAR", "Karagandinskaja oblast'", "Region"),
    ("KZ-KUS", "Kostanajskaja oblast'", "Region"),
    ("KZ-KZY", "Kyzylordinskaja oblast'", "Region"),
    ("KZ-MAN", "Mangghystaū oblysy", "Region"),
    ("KZ-PAV", "Pavlodar oblysy", "Region"),
    ("KZ-SEV", "Severo-Kazahstanskaja oblast'", "Region"),
    ("KZ-SHY", "Shymkent", "City"),
    ("KZ-VOS", "Shyghys Qazaqstan oblysy", "Region"),
    ("KZ-YUZ", "Turkestankaya oblast'", "Region"),
    ("KZ-ZAP", "Batys Qazaqstan oblysy", "Region"),
    ("KZ-ZHA", "Zhambyl oblysy", "Region"),
    ("LA-AT", "Attapu", "Province"),
    ("LA-BK", "Bokèo", "Province"),
    ("LA-BL", "Bolikhamxai", "Province"),
    ("LA-CH", "Champasak", "Province"),
    ("LA-HO", "Houaphan", "Province"),
    ("LA-KH", "Khammouan", "Province"),
    ("LA-LM", "Louang Namtha", "Province"),
    ("LA-LP", "Louangphabang", "Province"),
    ("LA-OU", "Oudômxai", "Province"),
    ("LA-PH", "Phôngsali", "Province"),
    ("LA-SL", "Salavan", "Province"),
    ("LA-SV", "Savannakhét", "Province"),
    ("LA-VI", "Viangchan", "Province"),
    ("LA-VT", "Viangchan", "Prefecture"),
    ("LA-XA", "Xaignabouli", "Province"),
    ("LA-XE", "Xékong", "Province"),
    ("LA-XI", "Xiangkhouang", "Province"),
    ("LA-XS", "Xaisômboun", "Province"),
    ("LB-AK", "Aakkâr", "Governorate"),
    ("LB-AS", "Ash Shimāl", "Governorate"),
    ("LB-BA", "Bayrūt", "Governorate"),
    ("LB-BH", "Baalbek-Hermel", "Governorate"),
    ("LB-BI", "Al Biqā‘", "Governorate"),
    ("LB-JA", "Al Janūb", "Governorate"),
    ("LB-JL", "Jabal Lubnān", "Governorate"),
    ("LB-NA", "An Nabaţīyah", "Governorate"),
    ("LC-01", "Anse la Raye", "District"),
    ("LC-02", "Castries", "District"),
    ("LC-03", "Choiseul", "District"),
    ("LC-05", "Dennery", "District"),
    ("LC-06", "Gros Islet", "District"),
    ("LC-07", "Laborie", "District"),
    ("LC-08", "Micoud", "District"),
    ("LC-10", "Soufrière", "District"),
    ("LC-11", "Vieux Fort", "District"),
    ("LC-12", "Canaries", "District"),
    ("LI-01", "Balzers", "Commune"),
    ("LI-02", "Eschen", "Commune"),
    ("LI-03", "Gamprin", "Commune"),
    ("LI-04", "Mauren", "Commune"),
    ("LI-05", "Planken", "Commune"),
    ("LI-06", "Ruggell", "Commune"),
    ("LI-07", "Schaan", "Commune"),
    ("LI-08", "Schellenberg", "Commune"),
    ("LI-09", "Triesen", "Commune"),
    ("LI-10", "Triesenberg", "Commune"),
    ("LI-11", "Vaduz", "Commune"),
    ("LK-1", "Western Province", "Province"),
    ("LK-11", "Colombo", "District"),
    ("LK-12", "Gampaha", "District"),
    ("LK-13", "Kalutara", "District"),
    ("LK-2", "Central Province", "Province"),
    ("LK-21", "Kandy", "District"),
    ("LK-22", "Matale", "District"),
    ("LK-23", "Nuwara Eliya", "District"),
    ("LK-3", "Southern Province", "Province"),
    ("LK-31", "Galle", "District"),
    ("LK-32", "Matara", "District"),
    ("LK-33", "Hambantota", "District"),
    ("LK-4", "Northern Province", "Province"),
    ("LK-41", "Jaffna", "District"),
    ("LK-42", "Kilinochchi", "District"),
    ("LK-43", "Mannar", "District"),
    ("LK-44", "Vavuniya", "District"),
    ("LK-45", "Mullaittivu", "District"),
    ("LK-5", "Eastern Province", "Province"),
    ("LK-51", "Batticaloa", "District"),
    ("LK-52", "Ampara", "District"),
    ("LK-53", "Trincomalee", "District"),
    ("LK-6", "North Western Province", "Province"),
    ("LK-61", "Kurunegala", "District"),
    ("LK-62", "Puttalam", "District"),
    ("LK-7", "North Central Province", "Province"),
    ("LK-71", "Anuradhapura", "District"),
    ("LK-72", "Polonnaruwa", "District"),
    ("LK-8", "Uva Province", "Province"),
    ("LK-81", "Badulla", "District"),
    ("LK-82", "Monaragala", "District"),
    ("LK-9", "Sabaragamuwa Province", "Province"),
    ("LK-91", "Ratnapura", "District"),
    ("LK-92", "Kegalla", "District"),
    ("LR-BG", "Bong", "County"),
    ("LR-BM", "Bomi", "County"),
    ("LR-CM", "Grand Cape Mount", "County"),
    ("LR-GB", "Grand Bassa", "County"),
    ("LR-GG", "Grand Gedeh", "County"),
    ("LR-GK", "Grand Kru", "County"),
    ("LR-GP", "Gbarpolu", "County"),
    ("LR-LO", "Lofa", "County"),
    ("LR-MG", "Margibi", "County"),
    ("LR-MO", "Montserrado", "County"),
    ("LR-MY", "Maryland", "County"),
    ("LR-NI", "Nimba", "County"),
    ("LR-RG", "River Gee", "County"),
    ("LR-RI", "River Cess", "County"),
    ("LR-SI", "Sinoe", "County"),
    ("LS-A", "Maseru", "District"),
    ("LS-B", "Botha-Bothe", "District"),
    ("LS-C", "Leribe", "District"),
    ("LS-D", "Berea", "District"),
    ("LS-E", "Mafeteng", "District"),
    ("LS-F", "Mohale's Hoek", "District"),
    ("LS-G", "Quthing", "District"),
    ("LS-H", "Qacha's Nek", "District"),
    ("LS-J", "Mokhotlong", "District"),
    ("LS-K", "Thaba-Tseka", "District"),
    ("LT-01", "Akmenė", "District municipality"),
    ("LT-02", "Alytaus miestas", "City municipality"),
    ("LT-03", "Alytus", "District municipality"),
    ("LT-04", "Anykščiai", "District municipality"),
    ("LT-05", "Birštono", "Municipality"),
    ("LT-06", "Biržai", "District municipality"),
    ("LT-07", "Druskininkai", "Municipality"),
    ("LT-08", "Elektrėnai", "Municipality"),
    ("LT-09", "Ignalina", "District municipality"),
    ("LT-10", "Jonava", "District municipality"),
    ("LT-11", "Joniškis", "District municipality"),
    ("LT-12", "Jurbarkas", "District municipality"),
    ("LT-13", "Kaišiadorys", "District municipality"),
    ("LT-14", "Kalvarijos", "Municipality"),
    ("LT-15", "Kauno miestas", "City municipality"),
    ("LT-16", "Kaunas", "District municipality"),
    ("LT-17", "Kazlų Rūdos", "Municipality"),
    ("LT-18", "Kėdainiai", "District municipality"),
    ("LT-19", "Kelmė", "District municipality"),
    ("LT-20", "Klaipėdos miestas", "City municipality"),
    ("LT-21", "Klaipėda", "District municipality"),
    ("LT-22", "Kretinga", "District municipality"),
    ("LT-23", "Kupiškis", "District municipality"),
    ("LT-24", "Lazdijai", "District municipality"),
    ("LT-25", "Marijampolė", "District municipality"),
    ("LT-26", "Mažeikiai", "District municipality"),
    ("LT-27", "Molėtai", "District municipality"),
    ("LT-28", "Neringa", "Municipality"),
    ("LT-29", "Pagėgiai", "Municipality"),
    ("LT-30", "Pakruojis", "District municipality"),
    ("LT-31", "Palangos miestas", "City municipality"),
    ("LT-32", "Panevėžio miestas", "City municipality"),
    ("LT-33", "Panevėžys", "District municipality"),
    ("LT-34", "Pasvalys", "District municipality"),
    ("LT-35", "Plungė", "District municipality"),
    ("LT-36", "Prienai", "District municipality"),
    ("LT-37", "Radviliškis", "District municipality"),
    ("LT-38", "Raseiniai", "District municipality"),
    ("LT-39", "Rietavo", "Municipality"),
    ("LT-40", "Rokiškis", "District municipality"),
    ("LT-41", "Šakiai", "District municipality"),
    ("LT-42", "Šalčininkai", "District municipality"),
    ("LT-43", "Šiaulių miestas", "City municipality"),
    ("LT-44", "Šiauliai", "District municipality"),
    ("LT-45", "Šilalė", "District municipality"),
    ("LT-46", "Šilutė", "District municipality"),
    ("LT-47", "Širvintos", "District municipality"),
    ("LT-48", "Skuodas", "District municipality"),
    ("LT-49", "Švenčionys", "District municipality"),
    ("LT-50", "Tauragė", "District municipality"),
    ("LT-51", "Telšiai", "District municipality"),
    ("LT-52", "Trakai", "District municipality"),
    ("LT-53", "Ukmergė", "District municipality"),
    ("LT-54", "Utena", "District municipality"),
    ("LT-55", "Varėna", "District municipality"),
    ("LT-56", "Vilkaviškis", "District municipality"),
    ("LT-57", "Vilniaus miestas", "City municipality"),
    ("LT-58", "Vilnius", "District municipality"),
    ("LT-59", "Visaginas", "Municipality"),
    ("LT-60", "Zarasai", "District municipality"),
    ("LT-AL", "Alytaus apskritis", "County"),
    ("LT-KL", "Klaipėdos apskritis", "County"),
    ("LT-KU", "Kauno apskritis", "County"),
    ("LT-MR", "Marijampolės apskritis", "County"),
    ("LT-PN", "Panevėžio apskritis", "County"),
    ("LT-SA", "Šiaulių apskritis", "County"),
    ("LT-TA", "Tauragės apskritis", "County"),
    ("LT-TE", "Telšių apskritis", "County"),
    ("LT-UT", "Utenos apskritis", "County"),
    ("LT-VL", "Vilniaus apskritis", "County"),
    ("LU-CA", "Capellen", "Canton"),
    ("LU-CL", "Clerf", "Canton"),
    ("LU-DI", "Diekirch", "Canton"),
    ("LU-EC", "Echternach", "Canton"),
    ("LU-ES", "Esch an der Alzette", "Canton"),
    ("LU-GR", "Grevenmacher", "Canton"),
    ("LU-LU", "Luxembourg", "Canton"),
    ("LU-ME", "Mersch", "Canton"),
    ("LU-RD", "Redange", "Canton"),
    ("LU-RM", "Remich", "Canton"),
    ("LU-VD", "Veianen", "Canton"),
    ("LU-WI", "Wiltz", "Canton"),
    ("LV-001", "Aglonas novads", "Municipality"),
    ("LV-002", "Aizkraukles novads", "Municipality"),
    ("LV-003", "Aizputes novads", "Municipality"),
    ("LV-004", "Aknīstes novads", "Municipality"),
    ("LV-005", "Alojas novads", "Municipality"),
    ("LV-006", "Alsungas novads", "Municipality"),
    ("LV-007", "Alūksnes novads", "Municipality"),
    ("LV-008", "Amatas novads", "Municipality"),
    ("LV-009", "Apes novads", "Municipality"),
    ("LV-010", "Auces novads", "Municipality"),
    ("LV-011", "Ādažu novads", "Municipality"),
    ("LV-012", "Babītes novads", "Municipality"),
    ("LV-013", "Baldones novads", "Municipality"),
    ("LV-014", "Baltinavas novads", "Municipality"),
    ("LV-015", "Balvu novads", "Municipality"),
    ("LV-016", "Bauskas novads", "Municipality"),
    ("LV-017", "Beverīnas novads", "Municipality"),
    ("LV-018", "Brocēnu novads", "Municipality"),
    ("LV-019", "Burtnieku novads", "Municipality"),
    ("LV-020", "Carnikavas novads", "Municipality"),
    ("LV-021", "Cesvaines novads", "Municipality"),
    ("LV-022", "Cēsu novads", "Municipality"),
    ("LV-023", "Ciblas novads", "Municipality"),
    ("LV-024", "Dagdas novads", "Municipality"),
    ("LV-025", "Daugavpils novads", "Municipality"),
    ("LV-026", "Dobeles novads", "Municipality"),
    ("LV-027", "Dundagas novads", "Municipality"),
    ("LV-028", "Durbes novads", "Municipality"),
    ("LV-029", "Engures novads", "Municipality"),
    ("LV-030", "Ērgļu novads", "Municipality"),
    ("LV-031", "Garkalnes novads", "Municipality"),
    ("LV-032", "Grobiņas novads", "Municipality"),
    ("LV-033", "Gulbenes novads", "Municipality"),
    ("LV-034", "Iecavas novads", "Municipality"),
    ("LV-035", "Ikšķiles novads", "Municipality"),
    ("LV-036", "Ilūkstes novads", "Municipality"),
    ("LV-037", "Inčukalna novads", "Municipality"),
    ("LV-038", "Jaunjelgavas novads", "Municipality"),
    ("LV-039", "Jaunpiebalgas novads", "Municipality"),
    ("LV-040", "Jaunpils novads", "Municipality"),
    ("LV-041", "Jelgavas novads", "Municipality"),
    ("LV-042", "Jēkabpils novads", "Municipality"),
    ("LV-043", "Kandavas novads", "Municipality"),
    ("LV-044", "Kārsavas novads", "Municipality"),
    ("LV-045", "Kocēnu novads", "Municipality"),
    ("LV-046", "Kokneses novads", "Municipality"),
    ("LV-047", "Krāslavas novads", "Municipality"),
    ("LV-048", "Krimuldas novads", "Municipality"),
    ("LV-049", "Krustpils novads", "Municipality"),
    ("LV-050", "Kuldīgas novads", "Municipality"),
    ("LV-051", "Ķeguma novads", "Municipality"),
    ("LV-052", "Ķekavas novads", "Municipality"),
    ("LV-053", "Lielvārdes novads", "Municipality"),
    ("LV-054", "Limbažu novads", "Municipality"),
    ("LV-055", "Līgatnes novads", "Municipality"),
    ("LV-056", "Līvānu novads", "Municipality"),
    ("LV-057", "Lubānas novads", "Municipality"),
    ("LV-058", "Ludzas novads", "Municipality"),
    ("LV-059", "Madonas novads", "Municipality"),
    ("LV-060", "Mazsalacas novads", "Municipality"),
    ("LV-061", "Mālpils novads", "Municipality"),
    ("LV-062", "Mārupes novads", "Municipality"),
    ("LV-063", "Mērsraga novads", "Municipality"),
    ("LV-064", "Naukšēnu novads", "Municipality"),
    ("LV-065", "Neretas novads", "Municipality"),
    ("LV-066", "Nīcas novads", "Municipality"),
    ("LV-067", "Ogres novads", "Municipality"),
    ("LV-068", "Olaines novads", "Municipality"),
    ("LV-069", "Ozolnieku novads", "Municipality"),
    ("LV-070", "Pārgaujas novads", "Municipality"),
    ("LV-071", "Pāvilostas novads", "Municipality"),
    ("LV-072", "Pļaviņu novads", "Municipality"),
    ("LV-073", "Preiļu novads", "Municipality"),
    ("LV-074", "Priekules novads", "Municipality"),
    ("LV-075", "Priekuļu novads", "Municipality"),
    ("LV-076", "Raunas novads", "Municipality"),
    ("LV-077", "Rēzeknes novads", "Municipality"),
    ("LV-078", "Riebiņu novads", "Municipality"),
    ("LV-079", "Rojas novads", "Municipality"),
    ("LV-080", "Ropažu novads", "Municipality"),
    ("LV-081", "Rucavas novads", "Municipality"),
    ("LV-082", "Rugāju novads", "Municipality"),
    ("LV-083", "Rundāles novads", "Municipality"),
    ("LV-084", "Rūjienas novads", "Municipality"),
    ("LV-085", "Salas novads", "Municipality"),
    ("LV-086", "Salacgrīvas novads", "Municipality"),
    ("LV-087", "Salaspils novads", "Municipality"),
    ("LV-088", "Saldus novads", "Municipality"),
    ("LV-089", "Saulkrastu novads", "Municipality"),
    ("LV-090", "Sējas novads", "Municipality"),
    ("LV-091", "Siguldas novads", "Municipality"),
    ("LV-092", "Skrīveru novads", "Municipality"),
    ("LV-093", "Skrundas novads", "Municipality"),
    ("LV-094", "Smiltenes novads", "Municipality"),
    ("LV-095", "Stopiņu novads", "Municipality"),
    ("LV-096", "Strenču novads", "Municipality"),
    ("LV-097", "Talsu novads", "Municipality"),
    ("LV-098", "Tērvetes novads", "Municipality"),
    ("LV-099", "Tukuma novads", "Municipality"),
    ("LV-100", "Vaiņodes novads", "Municipality"),
    ("LV-101", "Valkas novads", "Municipality"),
    ("LV-102", "Varakļānu novads", "Municipality"),
    ("LV-103", "Vārkavas novads", "Municipality"),
    ("LV-104", "Vecpiebalgas novads", "Municipality"),
    ("LV-105", "Vecumnieku novads", "Municipality"),
    ("LV-106", "Ventspils novads", "Municipality"),
    ("LV-107", "Viesītes novads", "Municipality"),
    ("LV-108", "Viļakas novads", "Municipality"),
    ("LV-109", "Viļānu novads", "Municipality"),
    ("LV-110", "Zilupes novads", "Municipality"),
    ("LV-DGV", "Daugavpils", "Republican city"),
    ("LV-JEL", "Jelgava", "Republican city"),
    ("LV-JKB", "Jēkabpils", "Republican city"),
    ("LV-JUR", "Jūrmala", "Republican city"),
    ("LV-LPX", "Liepāja", "Republican city"),
    ("LV-REZ", "Rēzekne", "Republican city"),
    ("LV-RIX", "Rīga", "Republican city"),
    ("LV-VEN", "Ventspils", "Republican city"),
    ("LV-VMR", "Valmiera", "Republican city"),
    ("LY-BA", "Banghāzī", "Popularate"),
    ("LY-BU", "Al Buţnān", "Popularate"),
    ("LY-DR", "Darnah", "Popularate"),
    ("LY-GT", "Ghāt", "Popularate"),
    ("LY-JA", "Al Jabal al Akhḑar", "Popularate"),
    ("LY-JG", "Al Jabal al Gharbī", "Popularate"),
    ("LY-JI", "Al Jafārah", "Popularate"),
    ("LY-JU", "Al Jufrah", "Popularate"),
    ("LY-KF", "Al Kufrah", "Popularate"),
    ("LY-MB", "Al Marqab", "Popularate"),
    ("LY-MI", "Mişrātah", "Popularate"),
    ("LY-MJ", "Al Marj", "Popularate"),
    ("LY-MQ", "Murzuq", "Popularate"),
    ("LY-NL", "Nālūt", "Popularate"),
    ("LY-NQ", "An Nuqāţ al Khams", "Popularate"),
    ("LY-SB", "Sabhā", "Popularate"),
    ("LY-SR", "Surt", "Popularate"),
    ("LY-TB", "Ţarābulus", "Popularate"),
    ("LY-WA", "Al Wāḩāt", "Popularate"),
    ("LY-WD", "Wādī al Ḩayāt", "Popularate"),
    ("LY-WS", "Wādī ash Shāţi’", "Popularate"),
    ("LY-ZA", "Az Zāwiyah", "Popularate"),
    ("MA-01", "Tanger-Tétouan-Al Hoceïma", "Region"),
    ("MA-02", "L'Oriental", "Region"),
    ("MA-03", "Fès-Meknès", "Region"),
    ("MA-04", "Rabat-Salé-Kénitra", "Region"),
    ("MA-05", "Béni Mellal-Khénifra", "Region"),
    ("MA-06", "Casablanca-Settat", "Region"),
    ("MA-07", "Marrakech-Safi", "Region"),
    ("MA-08", "Drâa-Tafilalet", "Region"),
    ("MA-09", "Souss-Massa", "Region"),
    ("MA-10", "Guelmim-Oued Noun (EH-partial)", "Region"),
    ("MA-11", "Laâyoune-Sakia El Hamra (EH-partial)", "Region"),
    ("MA-12", "Dakhla-Oued Ed-Dahab (EH)", "Region"),
    ("MA-AGD", "Agadir-Ida-Ou-Tanane", "Prefecture"),
    ("MA-AOU", "Aousserd (EH)", "Province"),
    ("MA-ASZ", "Assa-Zag (EH-partial)", "Province"),
    ("MA-AZI", "Azilal", "Province"),
    ("MA-BEM", "Béni Mellal", "Province"),
    ("MA-BER", "Berkane", "Province"),
    ("MA-BES", "Benslimane", "Province"),
    ("MA-BOD", "Boujdour (EH)", "Province"),
    ("MA-BOM", "Boulemane", "Province"),
    ("MA-BRR", "Berrechid", "Province"),
    ("MA-CAS", "Casablanca", "Prefecture"),
    ("MA-CHE", "Chefchaouen", "Province"),
    ("MA-CHI", "Chichaoua", "Province"),
    ("MA-CHT", "Chtouka-Ait Baha", "Province"),
    ("MA-DRI", "Driouch", "Province"),
    ("MA-ERR", "Errachidia", "Province"),
    ("MA-ESI", "Essaouira", "Province"),
    ("MA-ESM", "Es-Semara (EH-partial)", "Province"),
    ("MA-FAH", "Fahs-Anjra", "Province"),
    ("MA-FES", "Fès", "Prefecture"),
    ("MA-FIG", "Figuig", "Province"),
    ("MA-FQH", "Fquih Ben Salah", "Province"),
    ("MA-GUE", "Guelmim", "Province"),
    ("MA-GUF", "Guercif", "Province"),
    ("MA-HAJ", "El Hajeb", "Province"),
    ("MA-HAO", "Al Haouz", "Province"),
    ("MA-HOC", "Al Hoceïma", "Province"),
    ("MA-IFR", "Ifrane", "Province"),
    ("MA-INE", "Inezgane-Ait Melloul", "Prefecture"),
    ("MA-JDI", "El Jadida", "Province"),
    ("MA-JRA", "Jerada", "Province"),
    ("MA-KEN", "Kénitra", "Province"),
    ("MA-KES", "El Kelâa des Sraghna", "Province"),
    ("MA-KHE", "Khémisset", "Province"),
    ("MA-KHN", "Khénifra", "Province"),
    ("MA-KHO", "Khouribga", "Province"),
    ("MA-LAA", "Laâyoune (EH)", "Province"),
    ("MA-LAR", "Larache", "Province"),
    ("MA-MAR", "Marrakech", "Prefecture"),
    ("MA-MDF", "M’diq-Fnideq", "Prefecture"),
    ("MA-MED", "Médiouna", "Province"),
    ("MA-MEK", "Meknès", "Prefecture"),
    ("MA-MID", "Midelt", "Province"),
    ("MA-MOH", "Mohammadia", "Prefecture"),
    ("MA-MOU", "Moulay Yacoub", "Province"),
    ("MA-NAD", "Nador", "Province"),
    ("MA-NOU", "Nouaceur", "Province"),
    ("MA-OUA", "Ouarzazate", "Province"),
    ("MA-OUD", "Oued Ed-Dahab (EH)", "Province"),
    ("MA-OUJ", "Oujda-Angad", "Prefecture"),
    ("MA-OUZ", "Ouezzane", "Province"),
    ("MA-RAB", "Rabat", "Prefecture"),
    ("MA-REH", "Rehamna", "Province"),
    ("MA-SAF", "Safi", "Province"),
    ("MA-SAL", "Salé", "Prefecture"),
    ("MA-SEF", "Sefrou", "Province"),
    ("MA-SET", "Settat", "Province"),
    ("MA-SIB", "Sidi Bennour", "Province"),
    ("MA-SIF", "Sidi Ifni", "Province"),
    ("MA-SIK", "Sidi Kacem", "Province"),
    ("MA-SIL", "Sidi Slimane", "Province"),
    ("MA-SKH", "Skhirate-Témara", "Prefecture"),
    ("MA-TAF", "Tarfaya (EH-partial)", "Province"),
    ("MA-TAI", "Taourirt", "Province"),
    ("MA-TAO", "Taounate", "Province"),
    ("MA-TAR", "Taroudannt", "Province"),
    ("MA-TAT", "Tata", "Province"),
    ("MA-TAZ", "Taza", "Province"),
    ("MA-TET", "Tétouan", "Province"),
    ("MA-TIN", "Tinghir", "Province"),
    ("MA-TIZ", "Tiznit", "Province"),
    ("MA-TNG", "Tanger-Assilah", "Prefecture"),
    ("MA-TNT", "Tan-Tan (EH-partial)", "Province"),
    ("MA-YUS", "Youssoufia", "Province"),
    ("MA-ZAG", "Zagora", "Province"),
    ("MC-CL", "La Colle", "Quarter"),
    ("MC-CO", "La Condamine", "Quarter"),
    ("MC-FO", "Fontvieille", "Quarter"),
    ("MC-GA", "La Gare", "Quarter"),
    ("MC-JE", "Jardin Exotique", "Quarter"),
    ("MC-LA", "Larvotto", "Quarter"),
    ("MC-MA", "Malbousquet", "Quarter"),
    ("MC-MC", "Monte-Carlo", "Quarter"),
    ("MC-MG", "Moneghetti", "Quarter"),
    ("MC-MO", "Monaco-Ville", "Quarter"),
    ("MC-MU", "Moulins", "Quarter"),
    ("MC-PH", "Port-Hercule", "Quarter"),
    ("MC-SD", "Sainte-Dévote", "Quarter"),
    ("MC-SO", "La Source", "Quarter"),
    ("MC-SP", "Spélugues", "Quarter"),
    ("MC-SR", "Saint-Roman", "Quarter"),
    ("MC-VR", "Vallon de la Rousse", "Quarter"),
    ("MD-AN", "Anenii Noi", "District"),
    ("MD-BA", "Bălți", "City"),
    ("MD-BD", "Bender [Tighina]", "City"),
    ("MD-BR", "Briceni", "District"),
    ("MD-BS", "Basarabeasca", "District"),
    ("MD-CA", "Cahul", "District"),
    ("MD-CL", "Călărași", "District"),
    ("MD-CM", "Cimișlia", "District"),
    ("MD-CR", "Criuleni", "District"),
    ("MD-CS", "Căușeni", "District"),
    ("MD-CT", "Cantemir", "District"),
    ("MD-CU", "Chișinău", "City"),
    ("MD-DO", "Dondușeni", "District"),
    ("MD-DR", "Drochia", "District"),
    ("MD-DU", "Dubăsari", "District"),
    ("MD-ED", "Edineț", "District"),
    ("MD-FA", "Fălești", "District"),
    ("MD-FL", "Florești", "District"),
    ("MD-GA", "Găgăuzia, Unitatea teritorială autonomă (UTAG)", "Autonomous territorial unit"),
    ("MD-GL", "Glodeni", "District"),
    ("MD-HI", "Hîncești", "District"),
    ("MD-IA", "Ialoveni", "District"),
    ("MD-LE", "Leova", "District"),
    ("MD-NI", "Nisporeni", "District"),
    ("MD-OC", "Ocnița", "District"),
    ("MD-OR", "Orhei", "District"),
    ("MD-RE", "Rezina", "District"),
    ("MD-RI", "Rîșcani", "District"),
    ("MD-SD", "Șoldănești", "District"),
    ("MD-SI", "Sîngerei", "District"),
    ("MD-SN", "Stînga Nistrului, unitatea teritorială din", "Territorial unit"),
    ("MD-SO", "Soroca", "District"),
    ("MD-ST", "Strășeni", "District"),
    ("MD-SV", "Ștefan Vodă", "District"),
    ("MD-TA", "Taraclia", "District"),
    ("MD-TE", "Telenești", "District"),
    ("MD-UN", "Ungheni", "District"),
    ("ME-01", "Andrijevica", "Municipality"),
    ("ME-02", "Bar", "Municipality"),
    ("ME-03", "Berane", "Municipality"),
    ("ME-04", "Bijelo Polje", "Municipality"),
    ("ME-05", "Budva", "Municipality"),
    ("ME-06", "Cetinje", "Municipality"),
    ("ME-07", "Danilovgrad", "Municipality"),
    ("ME-08", "Herceg-Novi", "Municipality"),
    ("ME-09", "Kolašin", "Municipality"),
    ("ME-10", "Kotor", "Municipality"),
    ("ME-11", "Mojkovac", "Municipality"),
    ("ME-12", "Nikšić", "Municipality"),
    ("ME-13", "Plav", "Municipality"),
    ("ME-14", "Pljevlja", "Municipality"),
    ("ME-15", "Plužine", "Municipality"),
    ("ME-16", "Podgorica", "Municipality"),
    ("ME-17", "Rožaje", "Municipality"),
    ("ME-18", "Šavnik", "Municipality"),
    ("ME-19", "Tivat", "Municipality"),
    ("ME-20", "Ulcinj", "Municipality"),
    ("ME-21", "Žabljak", "Municipality"),
    ("ME-22", "Gusinje", "Municipality"),
    ("ME-23", "Petnjica", "Municipality"),
    ("ME-24", "Tuzi", "Municipality"),
    ("MG-A", "Toamasina", "Province"),
    ("MG-D", "Antsiranana", "Province"),
    ("MG-F", "Fianarantsoa", "Province"),
    ("MG-M", "Mahajanga", "Province"),
    ("MG-T", "Antananarivo", "Province"),
    ("MG-U", "Toliara", "Province"),
    ("MH-ALK", "Ailuk", "Municipality"),
    ("MH-ALL", "Ailinglaplap", "Municipality"),
    ("MH-ARN", "Arno", "Municipality"),
    ("MH-AUR", "Aur", "Municipality"),
    ("MH-EBO", "Ebon", "Municipality"),
    ("MH-ENI", "Enewetak & Ujelang", "Municipality"),
    ("MH-JAB", "Jabat", "Municipality"),
    ("MH-JAL", "Jaluit", "Municipality"),
    ("MH-KIL", "Bikini & Kili", "Municipality"),
    ("MH-KWA", "Kwajalein", "Municipality"),
    ("MH-L", "Ralik chain", "Chain (of islands)"),
    ("MH-LAE", "Lae", "Municipality"),
    ("MH-LIB", "Lib", "Municipality"),
    ("MH-LIK", "Likiep", "Municipality"),
    ("MH-MAJ", "Majuro", "Municipality"),
    ("MH-MAL", "Maloelap", "Municipality"),
    ("MH-MEJ", "Mejit", "Municipality"),
    ("MH-MIL", "Mili", "Municipality"),
    ("MH-NMK", "Namdrik", "Municipality"),
    ("MH-NMU", "Namu", "Municipality"),
    ("MH-RON", "Rongelap", "Municipality"),
    ("MH-T", "Ratak chain", "Chain (of islands)"),
    ("MH-UJA", "Ujae", "Municipality"),
    ("MH-UTI", "Utrik", "Municipality"),
    ("MH-WTH", "Wotho", "Municipality"),
    ("MH-WTJ", "Wotje", "Municipality"),
    ("MK-101", "Veles", "Municipality"),
    ("MK-102", "Gradsko", "Municipality"),
    ("MK-103", "Demir Kapija", "Municipality"),
    ("MK-104", "Kavadarci", "Municipality"),
    ("MK-105", "Lozovo", "Municipality"),
    ("MK-106", "Negotino", "Municipality"),
    ("MK-107", "Rosoman", "Municipality"),
    ("MK-108", "Sveti Nikole", "Municipality"),
    ("MK-109", "Čaška", "Municipality"),
    ("MK-201", "Berovo", "Municipality"),
    ("MK-202", "Vinica", "Municipality"),
    ("MK-203", "Delčevo", "Municipality"),
    ("MK-204", "Zrnovci", "Municipality"),
    ("MK-205", "Karbinci", "Municipality"),
    ("MK-206", "Kočani", "Municipality"),
    ("MK-207", "Makedonska Kamenica", "Municipality"),
    ("MK-208", "Pehčevo", "Municipality"),
    ("MK-209", "Probištip", "Municipality"),
    ("MK-210", "Češinovo-Obleševo", "Municipality"),
    ("MK-211", "Štip", "Municipality"),
    ("MK-301", "Vevčani", "Municipality"),
    ("MK-303", "Debar", "Municipality"),
    ("MK-304", "Debrca", "Municipality"),
    ("MK-307", "Kičevo", "Municipality"),
    ("MK-308", "Makedonski Brod", "Municipality"),
    ("MK-310", "Ohrid", "Municipality"),
    ("MK-311", "Plasnica", "Municipality"),
    ("MK-312", "Struga", "Municipality"),
    ("MK-313", "Centar Župa", "Municipality"),
    ("MK-401", "Bogdanci", "Municipality"),
    ("MK-402", "Bosilovo", "Municipality"),
    ("MK-403", "Valandovo", "Municipality"),
    ("MK-404", "Vasilevo", "Municipality"),
    ("MK-405", "Gevgelija", "Municipality"),
    ("MK-406", "Dojran", "Municipality"),
    ("MK-407", "Konče", "Municipality"),
    ("MK-408", "Novo Selo", "Municipality"),
    ("MK-409", "Radoviš", "Municipality"),
    ("MK-410", "Strumica", "Municipality"),
    ("MK-501", "Bitola", "Municipality"),
    ("MK-502", "Demir Hisar", "Municipality"),
    ("MK-503", "Dolneni", "Municipality"),
    ("MK-504", "Krivogaštani", "Municipality"),
    ("MK-505", "Kruševo", "Municipality"),
    ("MK-506", "Mogila", "Municipality"),
    ("MK-507", "Novaci", "Municipality"),
    ("MK-508", "Prilep", "Municipality"),
    ("MK-509", "Resen", "Municipality"),
    ("MK-601", "Bogovinje", "Municipality"),
    ("MK-602", "Brvenica", "Municipality"),
    ("MK-603", "Vrapčište", "Municipality"),
    ("MK-604", "Gostivar", "Municipality"),
    ("MK-605", "Želino", "Municipality"),
    ("MK-606", "Jegunovce", "Municipality"),
    ("MK-607", "Mavrovo i Rostuše", "Municipality"),
    ("MK-608", "Tearce", "Municipality"),
    ("MK-609", "Tetovo", "Municipality"),
    ("MK-701", "Kratovo", "Municipality"),
    ("MK-702", "Kriva Palanka", "Municipality"),
    ("MK-703", "Kumanovo", "Municipality"),
    ("MK-704", "Lipkovo", "Municipality"),
    ("MK-705", "Rankovce", "Municipality"),
    ("MK-706", "Staro Nagoričane", "Municipality"),
    ("MK-801", "Aerodrom †", "Municipality"),
    ("MK-802", "Aračinovo", "Municipality"),
    ("MK-803", "Butel †", "Municipality"),
    ("MK-804", "Gazi Baba †", "Municipality"),
    ("MK-805", "Gjorče Petrov †", "Municipality"),
    ("MK-806", "Zelenikovo", "Municipality"),
    ("MK-807", "Ilinden", "Municipality"),
    ("MK-808", "Karpoš †", "Municipality"),
    ("MK-809", "Kisela Voda †", "Municipality"),
    ("MK-810", "Petrovec", "Municipality"),
    ("MK-811", "Saraj †", "Municipality"),
    ("MK-812", "Sopište", "Municipality"),
    ("MK-813", "Studeničani", "Municipality"),
    ("MK-814", "Centar †", "Municipality"),
    ("MK-815", "Čair †", "Municipality"),
    ("MK-816", "Čučer-Sandevo", "Municipality"),
    ("MK-817", "Šuto Orizari †", "Municipality"),
    ("ML-1", "Kayes", "Region"),
    ("ML-10", "Taoudénit", "Region"),
    ("ML-2", "Koulikoro", "Region"),
    ("ML-3", "Sikasso", "Region"),
    ("ML-4", "Ségou", "Region"),
    ("ML-5", "Mopti", "Region"),
    ("ML-6", "Tombouctou", "Region"),
    ("ML-7", "Gao", "Region"),
    ("ML-8", "Kidal", "Region"),
    ("ML-9", "Ménaka", "Region"),
    ("ML-BKO", "Bamako", "District"),
    ("MM-01", "Sagaing", "Region"),
    ("MM-02", "Bago", "Region"),
    ("MM-03", "Magway", "Region"),
    ("MM-04", "Mandalay", "Region"),
    ("MM-05", "Tanintharyi", "Region"),
    ("MM-06", "Yangon", "Region"),
    ("MM-07", "Ayeyarwady", "Region"),
    ("MM-11", "Kachin", "State"),
    ("MM-12", "Kayah", "State"),
    ("MM-13", "Kayin", "State"),
    ("MM-14", "Chin", "State"),
    ("MM-15", "Mon", "State"),
    ("MM-16", "Rakhine", "State"),
    ("MM-17", "Shan", "State"),
    ("MM-18", "Nay Pyi Taw", "Union territory"),
    ("MN-035", "Orhon", "Province"),
    ("MN-037", "Darhan uul", "Province"),
    ("MN-039", "Hentiy", "Province"),
    ("MN-041", "Hövsgöl", "Province"),
    ("MN-043", "Hovd", "Province"),
    ("MN-046", "Uvs", "Province"),
    ("MN-047", "Töv", "Province"),
    ("MN-049", "Selenge", "Province"),
    ("MN-051", "Sühbaatar", "Province"),
    ("MN-053", "Ömnögovĭ", "Province"),
    ("MN-055", "Övörhangay", "Province"),
    ("MN-057", "Dzavhan", "Province"),
    ("MN-059", "Dundgovĭ", "Province"),
    ("MN-061", "Dornod", "Province"),
    ("MN-063", "Dornogovĭ", "Province"),
    ("MN-064", "Govĭ-Sümber", "Province"),
    ("MN-065", "Govĭ-Altay", "Province"),
    ("MN-067", "Bulgan", "Province"),
    ("MN-069", "Bayanhongor", "Province"),
    ("MN-071", "Bayan-Ölgiy", "Province"),
    ("MN-073", "Arhangay", "Province"),
    ("MN-1", "Ulaanbaatar", "Capital city"),
    ("MR-01", "Hodh ech Chargui", "Region"),
    ("MR-02", "Hodh el Gharbi", "Region"),
    ("MR-03", "Assaba", "Region"),
    ("MR-04", "Gorgol", "Region"),
    ("MR-05", "Brakna", "Region"),
    ("MR-06", "Trarza", "Region"),
    ("MR-07", "Adrar", "Region"),
    ("MR-08", "Dakhlet Nouâdhibou", "Region"),
    ("MR-09", "Tagant", "Region"),
    ("MR-10", "Guidimaka", "Region"),
    ("MR-11", "Tiris Zemmour", "Region"),
    ("MR-12", "Inchiri", "Region"),
    ("MR-13", "Nouakchott Ouest", "Region"),
    ("MR-14", "Nouakchott Nord", "Region"),
    ("MR-15", "Nouakchott Sud", "Region"),
    ("MT-01", "Attard", "Local council"),
    ("MT-02", "Balzan", "Local council"),
    ("MT-03", "Birgu", "Local council"),
    ("MT-04", "Birkirkara", "Local council"),
    ("MT-05", "Birżebbuġa", "Local council"),
    ("MT-06", "Bormla", "Local council"),
    ("MT-07", "Dingli", "Local council"),
    ("MT-08", "Fgura", "Local council"),
    ("MT-09", "Floriana", "Local council"),
    ("MT-10", "Fontana", "Local council"),
    ("MT-11", "Gudja", "Local council"),
    ("MT-12", "Gżira", "Local council"),
    ("MT-13", "Għajnsielem", "Local council"),
    ("MT-14", "Għarb", "Local council"),
    ("MT-15", "Għargħur", "Local council"),
    ("MT-16", "Għasri", "Local council"),
    ("MT-17", "Għaxaq", "Local council"),
    ("MT-18", "Ħamrun", "Local council"),
    ("MT-19", "Iklin", "Local council"),
    ("MT-20", "Isla", "Local council"),
    ("MT-21", "Kalkara", "Local council"),
    ("MT-22", "Kerċem", "Local council"),
    ("MT-23", "Kirkop", "Local council"),
    ("MT-24", "Lija", "Local council"),
    ("MT-25", "Luqa", "Local council"),
    ("MT-26", "Marsa", "Local council"),
    ("MT-27", "Marsaskala", "Local council"),
    ("MT-28", "Marsaxlokk", "Local council"),
    ("MT-29", "Mdina", "Local council"),
    ("MT-30", "Mellieħa", "Local council"),
    ("MT-31", "Mġarr", "Local council"),
    ("MT-32", "Mosta", "Local council"),
    ("MT-33", "Mqabba", "Local council"),
    ("MT-34", "Msida", "Local council"),
    ("MT-35", "Mtarfa", "Local council"),
    ("MT-36", "Munxar", "Local council"),
    ("MT-37", "Nadur", "Local council"),
    ("MT-38", "Naxxar", "Local council"),
    ("MT-39", "Paola", "Local council"),
    ("MT-40", "Pembroke", "Local council"),
    ("MT-41", "Pietà", "Local council"),
    ("MT-42", "Qala", "Local council"),
    ("MT-43", "Qormi", "Local council"),
    ("MT-44", "Qrendi", "Local council"),
    ("MT-45", "Rabat Gozo", "Local council"),
    ("MT-46", "Rabat Malta", "Local council"),
    ("MT-47", "Safi", "Local council"),
    ("MT-48", "Saint Julian's", "Local council"),
    ("MT-49", "Saint John", "Local council"),
    ("MT-50", "Saint Lawrence", "Local council"),
    ("MT-51", "Saint Paul's Bay", "Local council"),
    ("MT-52", "Sannat", "Local council"),
    ("MT-53", "Saint Lucia's", "Local council"),
    ("MT-54", "Santa Venera", "Local council"),
    ("MT-55", "Siġġiewi", "Local council"),
    ("MT-56", "Sliema", "Local council"),
    ("MT-57", "Swieqi", "Local council"),
    ("MT-58", "Ta' Xbiex", "Local council"),
    ("MT-59", "Tarxien", "Local council"),
    ("MT-60", "Valletta", "Local council"),
    ("MT-61", "Xagħra", "Local council"),
    ("MT-62", "Xewkija", "Local council"),
    ("MT-63", "Xgħajra", "Local council"),
    ("MT-64", "Żabbar", "Local council"),
    ("MT-65", "Żebbuġ Gozo", "Local council"),
    ("MT-66", "Żebbuġ Malta", "Local council"),
    ("MT-67", "Żejtun", "Local council"),
    ("MT-68", "Żurrieq", "Local council"),
    ("MU-AG", "Agalega Islands", "Dependency"),
    ("MU-BL", "Black River", "District"),
    ("MU-CC", "Cargados Carajos Shoals", "Dependency"),
    ("MU-FL", "Flacq", "District"),
    ("MU-GP", "Grand Port", "District"),
    ("MU-MO", "Moka", "District"),
    ("MU-PA", "Pamplemousses", "District"),
    ("MU-PL", "Port Louis", "District"),
    ("MU-PW", "Plaines Wilhems", "District"),
    ("MU-RO", "Rodrigues Island", "Dependency"),
    ("MU-RR", "Rivière du Rempart", "District"),
    ("MU-SA", "Savanne", "District"),
    ("MV-00", "South Ari Atoll", "Administrative atoll"),
    ("MV-01", "Addu City", "City"),
    ("MV-02", "North Ari Atoll", "Administrative atoll"),
    ("MV-03", "Faadhippolhu", "Administrative atoll"),
    ("MV-04", "Felidhu Atoll", "Administrative atoll"),
    ("MV-05", "Hahdhunmathi", "Administrative atoll"),
    ("MV-07", "North Thiladhunmathi", "Administrative atoll"),
    ("MV-08", "Kolhumadulu", "Administrative atoll"),
    ("MV-12", "Mulaku Atoll", "Administrative atoll"),
    ("MV-13", "North Maalhosmadulu", "Administrative atoll"),
    ("MV-14", "North Nilandhe Atoll", "Administrative atoll"),
    ("MV-17", "South Nilandhe Atoll", "Administrative atoll"),
    ("MV-20", "South Maalhosmadulu", "Administrative atoll"),
    ("MV-23", "South Thiladhunmathi", "Administrative atoll"),
    ("MV-24", "North Miladhunmadulu", "Administrative atoll"),
    ("MV-25", "South Miladhunmadulu", "Administrative atoll"),
    ("MV-26", "Male Atoll", "Administrative atoll"),
    ("MV-27", "North Huvadhu Atoll", "Administrative atoll"),
    ("MV-28", "South Huvadhu Atoll", "Administrative atoll"),
    ("MV-29", "Fuvammulah", "Administrative atoll"),
    ("MV-MLE", "Male", "City"),
    ("MW-BA", "Balaka", "District"),
    ("MW-BL", "Blantyre", "District"),
    ("MW-C", "Central Region", "Region"),
    ("MW-CK", "Chikwawa", "District"),
    ("MW-CR", "Chiradzulu", "District"),
    ("MW-CT", "Chitipa", "District"),
    ("MW-DE", "Dedza", "District"),
    ("MW-DO", "Dowa", "District"),
    ("MW-KR", "Karonga", "District"),
    ("MW-KS", "Kasungu", "District"),
    ("MW-LI", "Lilongwe", "District"),
    ("MW-LK", "Likoma", "District"),
    ("MW-MC", "Mchinji", "District"),
    ("MW-MG", "Mangochi", "District"),
    ("MW-MH", "Machinga", "District"),
    ("MW-MU", "Mulanje", "District"),
    ("MW-MW", "Mwanza", "District"),
    ("MW-MZ", "Mzimba", "District"),
    ("MW-N", "Northern Region", "Region"),
    ("MW-NB", "Nkhata Bay", "District"),
    ("MW-NE", "Neno", "District"),
    ("MW-NI", "Ntchisi", "District"),
    ("MW-NK", "Nkhotakota", "District"),
    ("MW-NS", "Nsanje", "District"),
    ("MW-NU", "Ntcheu", "District"),
    ("MW-PH", "Phalombe", "District"),
    ("MW-RU", "Rumphi", "District"),
    ("MW-S", "Southern Region", "Region"),
    ("MW-SA", "Salima", "District"),
    ("MW-TH", "Thyolo", "District"),
    ("MW-ZO", "Zomba", "District"),
    ("MX-AGU", "Aguascalientes", "State"),
    ("MX-BCN", "Baja California", "State"),
    ("MX-BCS", "Baja California Sur", "State"),
    ("MX-CAM", "Campeche", "State"),
    ("MX-CHH", "Chihuahua", "State"),
    ("MX-CHP", "Chiapas", "State"),
    ("MX-CMX", "Ciudad de México", "Federal district"),
    ("MX-COA", "Coahuila de Zaragoza", "State"),
    ("MX-COL", "Colima", "State"),
    ("MX-DUR", "Durango", "State"),
    ("MX-GRO", "Guerrero", "State"),
    ("MX-GUA", "Guanajuato", "State"),
    ("MX-HID", "Hidalgo", "State"),
    ("MX-JAL", "Jalisco", "State"),
    ("MX-MEX", "México", "State"),
    ("MX-MIC", "Michoacán de Ocampo", "State"),
    ("MX-MOR", "Morelos", "State"),
    ("MX-NAY", "Nayarit", "State"),
    ("MX-NLE", "Nuevo León", "State"),
    ("MX-OAX", "Oaxaca", "State"),
    ("MX-PUE", "Puebla", "State"),
    ("MX-QUE", "Querétaro", "State"),
    ("MX-ROO", "Quintana Roo", "State"),
    ("MX-SIN", "Sinaloa", "State"),
    ("MX-SLP", "San Luis Potosí", "State"),
    ("MX-SON", "Sonora", "State"),
    ("MX-TAB", "Tabasco", "State"),
    ("MX-TAM", "Tamaulipas", "State"),
    ("MX-TLA", "Tlaxcala", "State"),
    ("MX-VER", "Veracruz de Ignacio de la Llave", "State"),
    ("MX-YUC", "Yucatán", "State"),
    ("MX-ZAC", "Zacatecas", "State"),
    ("MY-01", "Johor", "State"),
    ("MY-02", "Kedah", "State"),
    ("MY-03", "Kelantan", "State"),
    ("MY-04", "Melaka", "State"),
    ("MY-05", "Negeri Sembilan", "State"),
    ("MY-06", "Pahang", "State"),
    ("MY-07", "Pulau Pinang", "State"),
    ("MY-08", "Perak", "State"),
    ("MY-09", "Perlis", "State"),
    ("MY-10", "Selangor", "State"),
    ("MY-11", "Terengganu", "State"),
    ("MY-12", "Sabah", "State"),
    ("MY-13", "Sarawak", "State"),
    ("MY-14", "Wilayah Persekutuan Kuala Lumpur", "Federal territory"),
    ("MY-15", "Wilayah Persekutuan Labuan", "Federal territory"),
    ("MY-16", "Wilayah Persekutuan Putrajaya", "Federal territory"),
    ("MZ-A", "Niassa", "Province"),
    ("MZ-B", "Manica", "Province"),
    ("MZ-G", "Gaza", "Province"),
    ("MZ-I", "Inhambane", "Province"),
    ("MZ-L", "Maputo", "Province"),
    ("MZ-MPM", "Maputo", "City"),
    ("MZ-N", "Nampula", "Province"),
    ("MZ-P", "Cabo Delgado", "Province"),
    ("MZ-Q", "Zambézia", "Province"),
    ("MZ-S", "Sofala", "Province"),
    ("MZ-T", "Tete", "Province"),
    ("NA-CA", "Zambezi", "Region"),
    ("NA-ER", "Erongo", "Region"),
    ("NA-HA", "Hardap", "Region"),
    ("NA-KA", "//Karas", "Region"),
    ("NA-KE", "Kavango East", "Region"),
    ("NA-KH", "Khomas", "Region"),
    ("NA-KU", "Kunene", "Region"),
    ("NA-KW", "Kavango West", "Region"),
    ("NA-OD", "Otjozondjupa", "Region"),
    ("NA-OH", "Omaheke", "Region"),
    ("NA-ON", "Oshana", "Region"),
    ("NA-OS", "Omusati", "Region"),
    ("NA-OT", "Oshikoto", "Region"),
    ("NA-OW", "Ohangwena", "Region"),
    ("NE-1", "Agadez", "Region"),
    ("NE-2", "Diffa", "Region"),
    ("NE-3", "Dosso", "Region"),
    ("NE-4", "Maradi", "Region"),
    ("NE-5", "Tahoua", "Region"),
    ("NE-6", "Tillabéri", "Region"),
    ("NE-7", "Zinder", "Region"),
    ("NE-8", "Niamey", "Urban community"),
    ("NG-AB", "Abia", "State"),
    ("NG-AD", "Adamawa", "State"),
    ("NG-AK", "Akwa Ibom", "State"),
    ("NG-AN", "Anambra", "State"),
    ("NG-BA", "Bauchi", "State"),
    ("NG-BE", "Benue", "State"),
    ("NG-BO", "Borno", "State"),
    ("NG-BY", "Bayelsa", "State"),
    ("NG-CR", "Cross River", "State"),
    ("NG-DE", "Delta", "State"),
    ("NG-EB", "Ebonyi", "State"),
    ("NG-ED", "Edo", "State"),
    ("NG-EK", "Ekiti", "State"),
    ("NG-EN", "Enugu", "State"),
    ("NG-FC", "Abuja Federal Capital Territory", "Capital territory"),
    ("NG-GO", "Gombe", "State"),
    ("NG-IM", "Imo", "State"),
    ("NG-JI", "Jigawa", "State"),
    ("NG-KD", "Kaduna", "State"),
    ("NG-KE", "Kebbi", "State"),
    ("NG-KN", "Kano", "State"),
    ("NG-KO", "Kogi", "State"),
    ("NG-KT", "Katsina", "State"),
    ("NG-KW", "Kwara", "State"),
    ("NG-LA", "Lagos", "State"),
    ("NG-NA", "Nasarawa", "State"),
    ("NG-NI", "Niger", "State"),
    ("NG-OG", "Ogun", "State"),
    ("NG-ON", "Ondo", "State"),
    ("NG-OS", "Osun", "State"),
    ("NG-OY", "Oyo", "State"),
    ("NG-PL", "Plateau", "State"),
    ("NG-RI", "Rivers", "State"),
    ("NG-SO", "Sokoto", "State"),
    ("NG-TA", "Taraba", "State"),
    ("NG-YO", "Yobe", "State"),
    ("NG-ZA", "Zamfara", "State"),
    ("NI-AN", "Costa Caribe Norte", "Autonomous region"),
    ("NI-AS", "Costa Caribe Sur", "Autonomous region"),
    ("NI-BO", "Boaco", "Department"),
    ("NI-CA", "Carazo", "Department"),
    ("NI-CI", "Chinandega", "Department"),
    ("NI-CO", "Chontales", "Department"),
    ("NI-ES", "Estelí", "Department"),
    ("NI-GR", "Granada", "Department"),
    ("NI-JI", "Jinotega", "Department"),
    ("NI-LE", "León", "Department"),
    ("NI-MD", "Madriz", "Department"),
    ("NI-MN", "Managua", "Department"),
    ("NI-MS", "Masaya", "Department"),
    ("NI-MT", "Matagalpa", "Department"),
    ("NI-NS", "Nueva Segovia", "Department"),
    ("NI-RI", "Rivas", "Department"),
    ("NI-SJ", "Río San Juan", "Department"),
    ("NL-AW", "Aruba", "Country"),
    ("NL-BQ1", "Bonaire", "Special municipality"),
    ("NL-BQ2", "Saba", "Special municipality"),
    ("NL-BQ3", "Sint Eustatius", "Special municipality"),
    ("NL-CW", "Curaçao", "Country"),
    ("NL-DR", "Drenthe", "Province"),
    ("NL-FL", "Flevoland", "Province"),
    ("NL-FR", "Fryslân", "Province"),
    ("NL-GE", "Gelderland", "Province"),
    ("NL-GR", "Groningen", "Province"),
    ("NL-LI", "Limburg", "Province"),
    ("NL-NB", "Noord-Brabant", "Province"),
    ("NL-NH", "Noord-Holland", "Province"),
    ("NL-OV", "Overijssel", "Province"),
    ("NL-SX", "Sint Maarten", "Country"),
    ("NL-UT", "Utrecht", "Province"),
    ("NL-ZE", "Zeeland", "Province"),
    ("NL-ZH", "Zuid-Holland", "Province"),
    ("NO-03", "Oslo", "County"),
    ("NO-11", "Rogaland", "County"),
    ("NO-15", "Møre og Romsdal", "County"),
    ("NO-18", "Nordland", "County"),
    ("NO-21", "Svalbard (Arctic Region)", "Arctic region"),
    ("NO-22", "Jan Mayen (Arctic Region)", "Arctic region"),
    ("NO-30", "Viken", "County"),
    ("NO-34", "Innlandet", "County"),
    ("NO-38", "Vestfold og Telemark", "County"),
    ("NO-42", "Agder", "County"),
    ("NO-46", "Vestland", "County"),
    ("NO-50", "Trööndelage", "County"),
    ("NO-54", "Romssa ja Finnmárkku", "County"),
    ("NP-1", "Central", "Development region"),
    ("NP-2", "Mid Western", "Development region"),
    ("NP-3", "Western", "Development region"),
    ("NP-4", "Eastern", "Development region"),
    ("NP-5", "Far Western", "Development region"),
    ("NP-BA", "Bagmati", "Zone"),
    ("NP-BH", "Bheri", "Zone"),
    ("NP-DH", "Dhawalagiri", "Zone"),
    ("NP-GA", "Gandaki", "Zone"),
    ("NP-JA", "Janakpur", "Zone"),
    ("NP-KA", "Karnali", "Zone"),
    ("NP-KO", "Kosi", "Zone"),
    ("NP-LU", "Lumbini", "Zone"),
    ("NP-MA", "Mahakali", "Zone"),
    ("NP-ME", "Mechi", "Zone"),
    ("NP-NA", "Narayani", "Zone"),
    ("NP-P1", "Province 1", "Province"),
    ("NP-P2", "Province 2", "Province"),
    ("NP-P3", "Bāgmatī", "Province"),
    ("NP-P4", "Gandaki", "Province"),
    ("NP-P5", "Province 5", "Province"),
    ("NP-P6", "Karnali", "Province"),
    ("NP-P7", "Sudūr Pashchim", "Province"),
    ("NP-RA", "Rapti", "Zone"),
    ("NP-SA", "Sagarmatha", "Zone"),
    ("NP-SE", "Seti", "Zone"),
    ("NR-01", "Aiwo", "District"),
    ("NR-02", "Anabar", "District"),
    ("NR-03", "Anetan", "District"),
    ("NR-04", "Anibare", "District"),
    ("NR-05", "Baitsi", "District"),
    ("NR-06", "Boe", "District"),
    ("NR-07", "Buada", "District"),
    ("NR-08", "Denigomodu", "District"),
    ("NR-09", "Ewa", "District"),
    ("NR-10", "Ijuw", "District"),
    ("NR-11", "Meneng", "District"),
    ("NR-12", "Nibok", "District"),
    ("NR-13", "Uaboe", "District"),
    ("NR-14", "Yaren", "District"),
    ("NZ-AUK", "Auckland", "Region"),
    ("NZ-BOP", "Bay of Plenty", "Region"),
    ("NZ-CAN", "Canterbury", "Region"),
    ("NZ-CIT", "Chatham Islands Territory", "Special island authority"),
    ("NZ-GIS", "Gisborne", "Region"),
    ("NZ-HKB", "Hawke's Bay", "Region"),
    ("NZ-MBH", "Marlborough", "Region"),
    ("NZ-MWT", "Manawatu-Wanganui", "Region"),
    ("NZ-NSN", "Nelson", "Region"),
    ("NZ-NTL", "Northland", "Region"),
    ("NZ-OTA", "Otago", "Region"),
    ("NZ-STL", "Southland", "Region"),
    ("NZ-TAS", "Tasman", "Region"),
    ("NZ-TKI", "Taranaki", "Region"),
    ("NZ-WGN", "Wellington", "Region"),
    ("NZ-WKO", "Waikato", "Region"),
    ("NZ-WTC", "West Coast", "Region"),
    ("OM-BJ", "Janūb al Bāţinah", "Governorate"),
    ("OM-BS", "Shamāl al Bāţinah", "Governorate"),
    ("OM-BU", "Al Buraymī", "Governorate"),
    ("OM-DA", "Ad Dākhilīyah", "Governorate"),
    ("OM-MA", "Masqaţ", "Governorate"),
    ("OM-MU", "Musandam", "Governorate"),
    ("OM-SJ", "Janūb ash Sharqīyah", "Governorate"),
    ("OM-SS", "Shamāl ash Sharqīyah", "Governorate"),
    ("OM-WU", "Al Wusţá", "Governorate"),
    ("OM-ZA", "Az̧ Z̧āhirah", "Governorate"),
    ("OM-ZU", "Z̧ufār", "Governorate"),
    ("PA-1", "Bocas del Toro", "Province"),
    ("PA-10", "Panamá Oeste", "Province"),
    ("PA-2", "Coclé", "Province"),
    ("PA-3", "Colón", "Province"),
    ("PA-4", "Chiriquí", "Province"),
    ("PA-5", "Darién", "Province"),
    ("PA-6", "Herrera", "Province"),
    ("PA-7", "Los Santos", "Province"),
    ("PA-8", "Panamá", "Province"),
    ("PA-9", "Veraguas", "Province"),
    ("PA-EM", "Emberá", "Indigenous region"),
    ("PA-KY", "Guna Yala", "Indigenous region"),
    ("PA-NB", "Ngöbe-Buglé", "Indigenous region"),
    ("PE-AMA", "Amarumayu", "Region"),
    ("PE-ANC", "Ancash", "Region"),
    ("PE-APU", "Apurimaq", "Region"),
    ("PE-ARE", "Arequipa", "Region"),
    ("PE-AYA", "Ayacucho", "Region"),
    ("PE-CAJ", "Cajamarca", "Region"),
    ("PE-CAL", "El Callao", "Region"),
    ("PE-CUS", "Cusco", "Region"),
    ("PE-HUC", "Huánuco", "Region"),
    ("PE-HUV", "Huancavelica", "Region"),
    ("PE-ICA", "Ica", "Region"),
    ("PE-JUN", "Hunin", "Region"),
    ("PE-LAL", "La Libertad", "Region"),
    ("PE-LAM", "Lambayeque", "Region"),
    ("PE-LIM", "Lima", "Region"),
    ("PE-LMA", "Lima hatun llaqta", "Municipality"),
    ("PE-LOR", "Loreto", "Region"),
    ("PE-MDD", "Madre de Dios", "Region"),
    ("PE-MOQ", "Moquegua", "Region"),
    ("PE-PAS", "Pasco", "Region"),
    ("PE-PIU", "Piura", "Region"),
    ("PE-PUN", "Puno", "Region"),
    ("PE-SAM", "San Martin", "Region"),
    ("PE-TAC", "Tacna", "Region"),
    ("PE-TUM", "Tumbes", "Region"),
    ("PE-UCA", "Ucayali", "Region"),
    ("PG-CPK", "Chimbu", "Province"),
    ("PG-CPM", "Central", "Province"),
    ("PG-EBR", "East New Britain", "Province"),
    ("PG-EHG", "Eastern Highlands", "Province"),
    ("PG-EPW", "Enga", "Province"),
    ("PG-ESW", "East Sepik", "Province"),
    ("PG-GPK", "Gulf", "Province"),
    ("PG-HLA", "Hela", "Province"),
    ("PG-JWK", "Jiwaka", "Province"),
    ("PG-MBA", "Milne Bay", "Province"),
    ("PG-MPL", "Morobe", "Province"),
    ("PG-MPM", "Madang", "Province"),
    ("PG-MRL", "Manus", "Province"),
    ("PG-NCD", "National Capital District (Port Moresby)", "District"),
    ("PG-NIK", "New Ireland", "Province"),
    ("PG-NPP", "Northern", "Province"),
    ("PG-NSB", "Bougainville", "Autonomous region"),
    ("PG-SAN", "West Sepik", "Province"),
    ("PG-SHM", "Southern Highlands", "Province"),
    ("PG-WBK", "West New Britain", "Province"),
    ("PG-WHM", "Western Highlands", "Province"),
    ("PG-WPD", "Western", "Province"),
    ("PH-00", "National Capital Region", "Region"),
    ("PH-01", "Ilocos (Region I)", "Region"),
    ("PH-02", "Cagayan Valley (Region II)", "Region"),
    ("PH-03", "Central Luzon (Region III)", "Region"),
    ("PH-05", "Bicol (Region V)", "Region"),
    ("PH-06", "Western Visayas (Region VI)", "Region"),
    ("PH-07", "Central Visayas (Region VII)", "Region"),
    ("PH-08", "Eastern Visayas (Region VIII)", "Region"),
    ("PH-09", "Zamboanga Peninsula (Region IX)", "Region"),
    ("PH-10", "Northern Mindanao (Region X)", "Region"),
    ("PH-11", "Davao (Region XI)", "Region"),
    ("PH-12", "Soccsksargen (Region XII)", "Region"),
    ("PH-13", "Caraga (Region XIII)", "Region"),
    ("PH-14", "Autonomous Region in Muslim Mindanao (ARMM)", "Region"),
    ("PH-15", "Cordillera Administrative Region (CAR)", "Region"),
    ("PH-40", "Calabarzon (Region IV-A)", "Region"),
    ("PH-41", "Mimaropa (Region IV-B)", "Region"),
    ("PH-ABR", "Abra", "Province"),
    ("PH-AGN", "Agusan del Norte", "Province"),
    ("PH-AGS", "Agusan del Sur", "Province"),
    ("PH-AKL", "Aklan", "Province"),
    ("PH-ALB", "Albay", "Province"),
    ("PH-ANT", "Antique", "Province"),
    ("PH-APA", "Apayao", "Province"),
    ("PH-AUR", "Aurora", "Province"),
    ("PH-BAN", "Bataan", "Province"),
    ("PH-BAS", "Basilan", "Province"),
    ("PH-BEN", "Benguet", "Province"),
    ("PH-BIL", "Biliran", "Province"),
    ("PH-BOH", "Bohol", "Province"),
    ("PH-BTG", "Batangas", "Province"),
    ("PH-BTN", "Batanes", "Province"),
    ("PH-BUK", "Bukidnon", "Province"),
    ("PH-BUL", "Bulacan", "Province"),
    ("PH-CAG", "Cagayan", "Province"),
    ("PH-CAM", "Camiguin", "Province"),
    ("PH-CAN", "Camarines Norte", "Province"),
    ("PH-CAP", "Capiz", "Province"),
    ("PH-CAS", "Camarines Sur", "Province"),
    ("PH-CAT", "Catanduanes", "Province"),
    ("PH-CAV", "Cavite", "Province"),
    ("PH-CEB", "Cebu", "Province"),
    ("PH-COM", "Davao de Oro", "Province"),
    ("PH-DAO", "Davao Oriental", "Province"),
    ("PH-DAS", "Davao del Sur", "Province"),
    ("PH-DAV", "Davao del Norte", "Province"),
    ("PH-DIN", "Dinagat Islands", "Province"),
    ("PH-DVO", "Davao Occidental", "Province"),
    ("PH-EAS", "Eastern Samar", "Province"),
    ("PH-GUI", "Guimaras", "Province"),
    ("PH-IFU", "Ifugao", "Province"),
    ("PH-ILI", "Iloilo", "Province"),
    ("PH-ILN", "Ilocos Norte", "Province"),
    ("PH-ILS", "Ilocos Sur", "Province"),
    ("PH-ISA", "Isabela", "Province"),
    ("PH-KAL", "Kalinga", "Province"),
    ("PH-LAG", "Laguna", "Province"),
    ("PH-LAN", "Lanao del Norte", "Province"),
    ("PH-LAS", "Lanao del Sur", "Province"),
    ("PH-LEY", "Leyte", "Province"),
    ("PH-LUN", "La Union", "Province"),
    ("PH-MAD", "Marinduque", "Province"),
    ("PH-MAG", "Maguindanao", "Province"),
    ("PH-MAS", "Masbate", "Province"),
    ("PH-MDC", "Mindoro Occidental", "Province"),
    ("PH-MDR", "Mindoro Oriental", "Province"),
    ("PH-MOU", "Mountain Province", "Province"),
    ("PH-MSC", "Misamis Occidental", "Province"),
    ("PH-MSR", "Misamis Oriental", "Province"),
    ("PH-NCO", "Cotabato", "Province"),
    ("PH-NEC", "Negros Occidental", "Province"),
    ("PH-NER", "Negros Oriental", "Province"),
    ("PH-NSA", "Northern Samar", "Province"),
    ("PH-NUE", "Nueva Ecija", "Province"),
    ("PH-NUV", "Nueva Vizcaya", "Province"),
    ("PH-PAM", "Pampanga", "Province"),
    ("PH-PAN", "Pangasinan", "Province"),
    ("PH-PLW", "Palawan", "Province"),
    ("PH-QUE", "Quezon", "Province"),
    ("PH-QUI", "Quirino", "Province"),
    ("PH-RIZ", "Rizal", "Province"),
    ("PH-ROM", "Romblon", "Province"),
    ("PH-SAR", "Sarangani", "Province"),
    ("PH-SCO", "South Cotabato", "Province"),
    ("PH-SIG", "Siquijor", "Province"),
    ("PH-SLE", "Southern Leyte", "Province"),
    ("PH-SLU", "Sulu", "Province"),
    ("PH-SOR", "Sorsogon", "Province"),
    ("PH-SUK", "Sultan Kudarat", "Province"),
    ("PH-SUN", "Surigao del Norte", "Province"),
    ("PH-SUR", "Surigao del Sur", "Province"),
    ("PH-TAR", "Tarlac", "Province"),
    ("PH-TAW", "Tawi-Tawi", "Province"),
    ("PH-WSA", "Samar", "Province"),
    ("PH-ZAN", "Zamboanga del Norte", "Province"),
    ("PH-ZAS", "Zamboanga del Sur", "Province"),
    ("PH-ZMB", "Zambales", "Province"),
    ("PH-ZSI", "Zamboanga Sibugay", "Province"),
    ("PK-BA", "Balochistan", "Province"),
    ("PK-GB", "Gilgit-Baltistan", "Pakistan administered area"),
    ("PK-IS", "Islamabad", "Federal capital territory"),
    ("PK-JK", "Azad Jammu and Kashmir", "Pakistan administered area"),
    ("PK-KP", "Khyber Pakhtunkhwa", "Province"),
    ("PK-PB", "Punjab", "Province"),
    ("PK-SD", "Sindh", "Province"),
    ("PL-02", "Dolnośląskie", "Voivodship"),
    ("PL-04", "Kujawsko-pomorskie", "Voivodship"),
    ("PL-06", "Lubelskie", "Voivodship"),
    ("PL-08", "Lubuskie", "Voivodship"),
    ("PL-10", "Łódzkie", "Voivodship"),
    ("PL-12", "Małopolskie", "Voivodship"),
    ("PL-14", "Mazowieckie", "Voivodship"),
    ("PL-16", "Opolskie", "Voivodship"),
    ("PL-18", "Podkarpackie", "Voivodship"),
    ("PL-20", "Podlaskie", "Voivodship"),
    ("PL-22", "Pomorskie", "Voivodship"),
    ("PL-24", "Śląskie", "Voivodship"),
    ("PL-26", "Świętokrzyskie", "Voivodship"),
    ("PL-28", "Warmińsko-mazurskie", "Voivodship"),
    ("PL-30", "Wielkopolskie", "Voivodship"),
    ("PL-32", "Zachodniopomorskie", "Voivodship"),
    ("PS-BTH", "Bethlehem", "Governorate"),
    ("PS-DEB", "Deir El Balah", "Governorate"),
    ("PS-GZA", "Gaza", "Governorate"),
    ("PS-HBN", "Hebron", "Governorate"),
    ("PS-JEM", "Jerusalem", "Governorate"),
    ("PS-JEN", "Jenin", "Governorate"),
    ("PS-JRH", "Jericho and Al Aghwar", "Governorate"),
    ("PS-KYS", "Khan Yunis", "Governorate"),
    ("PS-NBS", "Nablus", "Governorate"),
    ("PS-NGZ", "North Gaza", "Governorate"),
    ("PS-QQA", "Qalqilya", "Governorate"),
    ("PS-RBH", "Ramallah", "Governorate"),
    ("PS-RFH", "Rafah", "Governorate"),
    ("PS-SLT", "Salfit", "Governorate"),
    ("PS-TBS", "Tubas", "Governorate"),
    ("PS-TKM", "Tulkarm", "Governorate"),
    ("PT-01", "Aveiro", "District"),
    ("PT-02", "Beja", "District"),
    ("PT-03", "Braga", "District"),
    ("PT-04", "Bragança", "District"),
    ("PT-05", "Castelo Branco", "District"),
    ("PT-06", "Coimbra", "District"),
    ("PT-07", "Évora", "District"),
    ("PT-08", "Faro", "District"),
    ("PT-09", "Guarda", "District"),
    ("PT-10", "Leiria", "District"),
    ("PT-11", "Lisboa", "District"),
    ("PT-12", "Portalegre", "District"),
    ("PT-13", "Porto", "District"),
    ("PT-14", "Santarém", "District"),
    ("PT-15", "Setúbal", "District"),
    ("PT-16", "Viana do Castelo", "District"),
    ("PT-17", "Vila Real", "District"),
    ("PT-18", "Viseu", "District"),
    ("PT-20", "Região Autónoma dos Açores", "Autonomous region"),
    ("PT-30", "Região Autónoma da Madeira", "Autonomous region"),
    ("PW-002", "Aimeliik", "State"),
    ("PW-004", "Airai", "State"),
    ("PW-010", "Angaur", "State"),
    ("PW-050", "Hatohobei", "State"),
    ("PW-100", "Kayangel", "State"),
    ("PW-150", "Koror", "State"),
    ("PW-212", "Melekeok", "State"),
    ("PW-214", "Ngaraard", "State"),
    ("PW-218", "Ngarchelong", "State"),
    ("PW-222", "Ngardmau", "State"),
    ("PW-224", "Ngatpang", "State"),
    ("PW-226", "Ngchesar", "State"),
    ("PW-227", "Ngeremlengui", "State"),
    ("PW-228", "Ngiwal", "State"),
    ("PW-350", "Peleliu", "State"),
    ("PW-370", "Sonsorol", "State"),
    ("PY-1", "Concepción", "Department"),
    ("PY-10", "Alto Paraná", "Department"),
    ("PY-11", "Central", "Department"),
    ("PY-12", "Ñeembucú", "Department"),
    ("PY-13", "Amambay", "Department"),
    ("PY-14", "Canindeyú", "Department"),
    ("PY-15", "Presidente Hayes", "Department"),
    ("PY-16", "Alto Paraguay", "Department"),
    ("PY-19", "Boquerón", "Department"),
    ("PY-2", "San Pedro", "Department"),
    ("PY-3", "Cordillera", "Department"),
    ("PY-4", "Guairá", "Department"),
    ("PY-5", "Caaguazú", "Department"),
    ("PY-6", "Caazapá", "Department"),
    ("PY-7", "Itapúa", "Department"),
    ("PY-8", "Misiones", "Department"),
    ("PY-9", "Paraguarí", "Department"),
    ("PY-ASU", "Asunción", "Capital"),
    ("QA-DA", "Ad Dawḩah", "Municipality"),
    ("QA-KH", "Al Khawr wa adh Dhakhīrah", "Municipality"),
    ("QA-MS", "Ash Shamāl", "Municipality"),
    ("QA-RA", "Ar Rayyān", "Municipality"),
    ("QA-SH", "Ash Shīḩānīyah", "Municipality"),
    ("QA-US", "Umm Şalāl", "Municipality"),
    ("QA-WA", "Al Wakrah", "Municipality"),
    ("QA-ZA", "Az̧ Z̧a‘āyin", "Municipality"),
    ("RO-AB", "Alba", "Department"),
    ("RO-AG", "Argeș", "Department"),
    ("RO-AR", "Arad", "Department"),
    ("RO-B", "București", "Municipality"),
    ("RO-BC", "Bacău", "Department"),
    ("RO-BH", "Bihor", "Department"),
    ("RO-BN", "Bistrița-Năsăud", "Department"),
    ("RO-BR", "Brăila", "Department"),
    ("RO-BT", "Botoșani", "Department"),
    ("RO-BV", "Brașov", "Department"),
    ("RO-BZ", "Buzău", "Department"),
    ("RO-CJ", "Cluj", "Department"),
    ("RO-CL", "Călărași", "Department"),
    ("RO-CS", "Caraș-Severin", "Department"),
    ("RO-CT", "Constanța", "Department"),
    ("RO-CV", "Covasna", "Department"),
    ("RO-DB", "Dâmbovița", "Department"),
    ("RO-DJ", "Dolj", "Department"),
    ("RO-GJ", "Gorj", "Department"),
    ("RO-GL", "Galați", "Department"),
    ("RO-GR", "Giurgiu", "Department"),
    ("RO-HD", "Hunedoara", "Department"),
    ("RO-HR", "Harghita", "Department"),
    ("RO-IF", "Ilfov", "Department"),
    ("RO-IL", "Ialomița", "Department"),
    ("RO-IS", "Iași", "Department"),
    ("RO-MH", "Mehedinți", "Department"),
    ("RO-MM", "Maramureș", "Department"),
    ("RO-MS", "Mureș", "Department"),
    ("RO-NT", "Neamț", "Department"),
    ("RO-OT", "Olt", "Department"),
    ("RO-PH", "Prahova", "Department"),
    ("RO-SB", "Sibiu", "Department"),
    ("RO-SJ", "Sălaj", "Department"),
    ("RO-SM", "Satu Mare", "Department"),
    ("RO-SV", "Suceava", "Department"),
    ("RO-TL", "Tulcea", "Department"),
    ("RO-TM", "Timiș", "Department"),
    ("RO-TR", "Teleorman", "Department"),
    ("RO-VL", "Vâlcea", "Department"),
    ("RO-VN", "Vrancea", "Department"),
    ("RO-VS", "Vaslui", "Department"),
    ("RS-00", "Beograd", "City"),
    ("RS-01", "Severnobački okrug", "District"),
    ("RS-02", "Srednjebanatski okrug", "District"),
    ("RS-03", "Severnobanatski okrug", "District"),
    ("RS-04", "Južnobanatski okrug", "District"),
    ("RS-05", "Zapadnobački okrug", "District"),
    ("RS-06", "Južnobački okrug", "District"),
    ("RS-07", "Sremski okrug", "District"),
    ("RS-08", "Mačvanski okrug", "District"),
    ("RS-09", "Kolubarski okrug", "District"),
    ("RS-10", "Podunavski okrug", "District"),
    ("RS-11", "Braničevski okrug", "District"),
    ("RS-12", "Šumadijski okrug", "District"),
    ("RS-13", "Pomoravski okrug", "District"),
    ("RS-14", "Borski okrug", "District"),
    ("RS-15", "Zaječarski okrug", "District"),
    ("RS-16", "Zlatiborski okrug", "District"),
    ("RS-17", "Moravički okrug", "District"),
    ("RS-18", "Raški okrug", "District"),
    ("RS-19", "Rasinski okrug", "District"),
    ("RS-20", "Nišavski okrug", "District"),
    ("RS-21", "Toplički okrug", "District"),
    ("RS-22", "Pirotski okrug", "District"),
    ("RS-23", "Jablanički okrug", "District"),
    ("RS-24", "Pčinjski okrug", "District"),
    ("RS-25", "Kosovski okrug", "District"),
    ("RS-26", "Pećki okrug", "District"),
    ("RS-27", "Prizrenski okrug", "District"),
    ("RS-28", "Kosovsko-Mitrovački okrug", "District"),
    ("RS-29", "Kosovsko-Pomoravski okrug", "District"),
    ("RS-KM", "Kosovo-Metohija", "Autonomous province"),
    ("RS-VO", "Vojvodina", "Autonomous province"),
    ("RU-AD", "Adygeja, Respublika", "Republic"),
    ("RU-AL", "Altaj, Respublika", "Republic"),
    ("RU-ALT", "Altajskij kraj", "Administrative territory"),
    ("RU-AMU", "Amurskaja oblast'", "Administrative region"),
    ("RU-ARK", "Arhangel'skaja oblast'", "Administrative region"),
    ("RU-AST", "Astrahanskaja oblast'", "Administrative region"),
    ("RU-BA", "Bashkortostan, Respublika", "Republic"),
    ("RU-BEL", "Belgorodskaja oblast'", "Administrative region"),
    ("RU-BRY", "Brjanskaja oblast'", "Administrative region"),
    ("RU-BU", "Burjatija, Respublika", "Republic"),
    ("RU-CE", "Chechenskaya Respublika", "Republic"),
    ("RU-CHE", "Chelyabinskaya oblast'", "Administrative region"),
    ("RU-CHU", "Chukotskiy avtonomnyy okrug", "Autonomous district"),
    ("RU-CU", "Chuvashskaya Respublika", "Republic"),
    ("RU-DA", "Dagestan, Respublika", "Republic"),
    ("RU-IN", "Ingushetiya, Respublika", "Republic"),
    ("RU-IRK", "Irkutskaja oblast'", "Administrative region"),
    ("RU-IVA", "Ivanovskaja oblast'", "Administrative region"),
    ("RU-KAM", "Kamchatskiy kray", "Administrative territory"),
    ("RU-KB", "Kabardino-Balkarskaja Respublika", "Republic"),
    ("RU-KC", "Karachayevo-Cherkesskaya Respublika", "Republic"),
    ("RU-KDA", "Krasnodarskij kraj", "Administrative territory"),
    ("RU-KEM", "Kemerovskaja oblast'", "Administrative region"),
    ("RU-KGD", "Kaliningradskaja oblast'", "Administrative region"),
    ("RU-KGN", "Kurganskaja oblast'", "Administrative region"),
    ("RU-KHA", "Habarovskij kraj", "Administrative territory"),
    ("RU-KHM", "Hanty-Mansijskij avtonomnyj okrug", "Autonomous district"),
    ("RU-KIR", "Kirovskaja oblast'", "Administrative region"),
    ("RU-KK", "Hakasija, Respublika", "Republic"),
    ("RU-KL", "Kalmykija, Respublika", "Republic"),
    ("RU-KLU", "Kaluzhskaya oblast'", "Administrative region"),
    ("RU-KO", "Komi, Respublika", "Republic"),
    ("RU-KOS", "Kostromskaja oblast'", "Administrative region"),
    ("RU-KR", "Karelija, Respublika", "Republic"),
    ("RU-KRS", "Kurskaja oblast'", "Administrative region"),
    ("RU-KYA", "Krasnojarskij kraj", "Administrative territory"),
    ("RU-LEN", "Leningradskaja oblast'", "Administrative region"),
    ("RU-LIP", "Lipeckaja oblast'", "Administrative region"),
    ("RU-MAG", "Magadanskaja oblast'", "Administrative region"),
    ("RU-ME", "Marij Èl, Respublika", "Republic"),
    ("RU-MO", "Mordovija, Respublika", "Republic"),
    ("RU-MOS", "Moskovskaja oblast'", "Administrative region"),
    ("RU-MOW", "Moskva", "Autonomous city"),
    ("RU-MUR", "Murmanskaja oblast'", "Administrative region"),
    ("RU-NEN", "Neneckij avtonomnyj okrug", "Autonomous district"),
    ("RU-NGR", "Novgorodskaja oblast'", "Administrative region"),
    ("RU-NIZ", "Nizhegorodskaya oblast'", "Administrative region"),
    ("RU-NVS", "Novosibirskaja oblast'", "Administrative region"),
    ("RU-OMS", "Omskaja oblast'", "Administrative region"),
    ("RU-ORE", "Orenburgskaja oblast'", "Administrative region"),
    ("RU-ORL", "Orlovskaja oblast'", "Administrative region"),
    ("RU-PER", "Permskij kraj", "Administrative territory"),
    ("RU-PNZ", "Penzenskaja oblast'", "Administrative region"),
    ("RU-PRI", "Primorskij kraj", "Administrative territory"),
    ("RU-PSK", "Pskovskaja oblast'", "Administrative region"),
    ("RU-ROS", "Rostovskaja oblast'", "Administrative region"),
    ("RU-RYA", "Rjazanskaja oblast'", "Administrative region"),
    ("RU-SA", "Saha, Respublika", "Republic"),
    ("RU-SAK", "Sahalinskaja oblast'", "Administrative region"),
    ("RU-SAM", "Samarskaja oblast'", "Administrative region"),
    ("RU-SAR", "Saratovskaja oblast'", "Administrative region"),
    ("RU-SE", "Severnaja Osetija, Respublika", "Republic"),
    ("RU-SMO", "Smolenskaja oblast'", "Administrative region"),
    ("RU-SPE", "Sankt-Peterburg", "Autonomous city"),
    ("RU-STA", "Stavropol'skij kraj", "Administrative territory"),
    ("RU-SVE", "Sverdlovskaja oblast'", "Administrative region"),
    ("RU-TA", "Tatarstan, Respublika", "Republic"),
    ("RU-TAM", "Tambovskaja oblast'", "Administrative region"),
    ("RU-TOM", "Tomskaja oblast'", "Administrative region"),
    ("RU-TUL", "Tul'skaja oblast'", "Administrative region"),
    ("RU-TVE", "Tverskaja oblast'", "Administrative region"),
    ("RU-TY", "Tyva, Respublika", "Republic"),
    ("RU-TYU", "Tjumenskaja oblast'", "Administrative region"),
    ("RU-UD", "Udmurtskaja Respublika", "Republic"),
    ("RU-ULY", "Ul'janovskaja oblast'", "Administrative region"),
    ("RU-VGG", "Volgogradskaja oblast'", "Administrative region"),
    ("RU-VLA", "Vladimirskaja oblast'", "Administrative region"),
    ("RU-VLG", "Vologodskaja oblast'", "Administrative region"),
    ("RU-VOR", "Voronezhskaya oblast'", "Administrative region"),
    ("RU-YAN", "Jamalo-Neneckij avtonomnyj okrug", "Autonomous district"),
    ("RU-YAR", "Jaroslavskaja oblast'", "Administrative region"),
    ("RU-YEV", "Evrejskaja avtonomnaja oblast'", "Autonomous region"),
    ("RU-ZAB", "Zabajkal'skij kraj", "Administrative territory"),
    ("RW-01", "City of Kigali", "City"),
    ("RW-02", "Eastern", "Province"),
    ("RW-03", "Northern", "Province"),
    ("RW-04", "Western", "Province"),
    ("RW-05", "Southern", "Province"),
    ("SA-01", "Ar Riyāḑ", "Region"),
    ("SA-02", "Makkah al Mukarramah", "Region"),
    ("SA-03", "Al Madīnah al Munawwarah", "Region"),
    ("SA-04", "Ash Sharqīyah", "Region"),
    ("SA-05", "Al Qaşīm", "Region"),
    ("SA-06", "Ḩā'il", "Region"),
    ("SA-07", "Tabūk", "Region"),
    ("SA-08", "Al Ḩudūd ash Shamālīyah", "Region"),
    ("SA-09", "Jāzān", "Region"),
    ("SA-10", "Najrān", "Region"),
    ("SA-11", "Al Bāḩah", "Region"),
    ("SA-12", "Al Jawf", "Region"),
    ("SA-14", "'Asīr", "Region"),
    ("SB-CE", "Central", "Province"),
    ("SB-CH", "Choiseul", "Province"),
    ("SB-CT", "Capital Territory (Honiara)", "Capital territory"),
    ("SB-GU", "Guadalcanal", "Province"),
    ("SB-IS", "Isabel", "Province"),
    ("SB-MK", "Makira-Ulawa", "Province"),
    ("SB-ML", "Malaita", "Province"),
    ("SB-RB", "Rennell and Bellona", "Province"),
    ("SB-TE", "Temotu", "Province"),
    ("SB-WE", "Western", "Province"),
    ("SC-01", "Anse aux Pins", "District"),
    ("SC-02", "Anse Boileau", "District"),
    ("SC-03", "Anse Etoile", "District"),
    ("SC-04", "Au Cap", "District"),
    ("SC-05", "Anse Royale", "District"),
    ("SC-06", "Baie Lazare", "District"),
    ("SC-07", "Baie Sainte Anne", "District"),
    ("SC-08", "Beau Vallon", "District"),
    ("SC-09", "Bel Air", "District"),
    ("SC-10", "Bel Ombre", "District"),
    ("SC-11", "Cascade", "District"),
    ("SC-12", "Glacis", "District"),
    ("SC-13", "Grand Anse Mahe", "District"),
    ("SC-14", "Grand Anse Praslin", "District"),
    ("SC-15", "La Digue", "District"),
    ("SC-16", "English River", "District"),
    ("SC-17", "Mont Buxton", "District"),
    ("SC-18", "Mont Fleuri", "District"),
    ("SC-19", "Plaisance", "District"),
    ("SC-20", "Pointe Larue", "District"),
    ("SC-21", "Port Glaud", "District"),
    ("SC-22", "Saint Louis", "District"),
    ("SC-23", "Takamaka", "District"),
    ("SC-24", "Les Mamelles", "District"),
    ("SC-25", "Roche Caiman", "District"),
    ("SC-26", "Ile Perseverance I", "District"),
    ("SC-27", "Ile Perseverance II", "District"),
    ("SD-DC", "Central Darfur", "State"),
    ("SD-DE", "East Darfur", "State"),
    ("SD-DN", "North Darfur", "State"),
    ("SD-DS", "South Darfur", "State"),
    ("SD-DW", "West Darfur", "State"),
    ("SD-GD", "Gedaref", "State"),
    ("SD-GK", "West Kordofan", "State"),
    ("SD-GZ", "Gezira", "State"),
    ("SD-KA", "Kassala", "State"),
    ("SD-KH", "Khartoum", "State"),
    ("SD-KN", "North Kordofan", "State"),
    ("SD-KS", "South Kordofan", "State"),
    ("SD-NB", "Blue Nile", "State"),
    ("SD-NO", "Northern", "State"),
    ("SD-NR", "River Nile", "State"),
    ("SD-NW", "White Nile", "State"),
    ("SD-RS", "Red Sea", "State"),
    ("SD-SI", "Sennar", "State"),
    ("SE-AB", "Stockholms län [SE-01]", "County"),
    ("SE-AC", "Västerbottens län [SE-24]", "County"),
    ("SE-BD", "Norrbottens län [SE-25]", "County"),
    ("SE-C", "Uppsala län [SE-03]", "County"),
    ("SE-D", "Södermanlands län [SE-04]", "County"),
    ("SE-E", "Östergötlands län [SE-05]", "County"),
    ("SE-F", "Jönköpings län [SE-06]", "County"),
    ("SE-G", "Kronobergs län [SE-07]", "County"),
    ("SE-H", "Kalmar län [SE-08]", "County"),
    ("SE-I", "Gotlands län [SE-09]", "County"),
    ("SE-K", "Blekinge län [SE-10]", "County"),
    ("SE-M", "Skåne län [SE-12]", "County"),
    ("SE-N", "Hallands län [SE-13]", "County"),
    ("SE-O", "Västra Götalands län [SE-14]", "County"),
    ("SE-S", "Värmlands län [SE-17]", "County"),
    ("SE-T", "Örebro län [SE-18]", "County"),
    ("SE-U", "Västmanlands län [SE-19]", "County"),
    ("SE-W", "Dalarnas län [SE-20]", "County"),
    ("SE-X", "Gävleborgs län [SE-21]", "County"),
    ("SE-Y", "Västernorrlands län [SE-22]", "County"),
    ("SE-Z", "Jämtlands län [SE-23]", "County"),
    ("SG-01", "Central Singapore", "District"),
    ("SG-02", "North East", "District"),
    ("SG-03", "North West", "District"),
    ("SG-04", "South East", "District"),
    ("SG-05", "South West", "District"),
    ("SH-AC", "Ascension", "Geographical entity"),
    ("SH-HL", "Saint Helena", "Geographical entity"),
    ("SH-TA", "Tristan da Cunha", "Geographical entity"),
    ("SI-001", "Ajdovščina", "Municipality"),
    ("SI-002", "Beltinci", "Municipality"),
    ("SI-003", "Bled", "Municipality"),
    ("SI-004", "Bohinj", "Municipality"),
    ("SI-005", "Borovnica", "Municipality"),
    ("SI-006", "Bovec", "Municipality"),
    ("SI-007", "Brda", "Municipality"),
    ("SI-008", "Brezovica", "Municipality"),
    ("SI-009", "Brežice", "Municipality"),
    ("SI-010", "Tišina", "Municipality"),
    ("SI-011", "Celje", "Municipality"),
    ("SI-012", "Cerklje na Gorenjskem", "Municipality"),
    ("SI-013", "Cerknica", "Municipality"),
    ("SI-014", "Cerkno", "Municipality"),
    ("SI-015", "Črenšovci", "Municipality"),
    ("SI-016", "Črna na Koroškem", "Municipality"),
    ("SI-017", "Črnomelj", "Municipality"),
    ("SI-018", "Destrnik", "Municipality"),
    ("SI-019", "Divača", "Municipality"),
    ("SI-020", "Dobrepolje", "Municipality"),
    ("SI-021", "Dobrova-Polhov Gradec", "Municipality"),
    ("SI-022", "Dol pri Ljubljani", "Municipality"),
    ("SI-023", "Domžale", "Municipality"),
    ("SI-024", "Dornava", "Municipality"),
    ("SI-025", "Dravograd", "Municipality"),
    ("SI-026", "Duplek", "Municipality"),
    ("SI-027", "Gorenja vas-Poljane", "Municipality"),
    ("SI-028", "Gorišnica", "Municipality"),
    ("SI-029", "Gornja Radgona", "Municipality"),
    ("SI-030", "Gornji Grad", "Municipality"),
    ("SI-031", "Gornji Petrovci", "Municipality"),
    ("SI-032", "Grosuplje", "Municipality"),
    ("SI-033", "Šalovci", "Municipality"),
    ("SI-034", "Hrastnik", "Municipality"),
    ("SI-035", "Hrpelje-Kozina", "Municipality"),
    ("SI-036", "Idrija", "Municipality"),
    ("SI-037", "Ig", "Municipality"),
    ("SI-038", "Ilirska Bistrica", "Municipality"),
    ("SI-039", "Ivančna Gorica", "Municipality"),
    ("SI-040", "Izola", "Municipality"),
    ("SI-041", "Jesenice", "Municipality"),
    ("SI-042", "Juršinci", "Municipality"),
    ("SI-043", "Kamnik", "Municipality"),
    ("SI-044", "Kanal", "Municipality"),
    ("SI-045", "Kidričevo", "Municipality"),
    ("SI-046", "Kobarid", "Municipality"),
    ("SI-047", "Kobilje", "Municipality"),
    ("SI-048", "Kočevje", "Municipality"),
    ("SI-049", "Komen", "Municipality"),
    ("SI-050", "Koper", "Municipality"),
    ("SI-051", "Kozje", "Municipality"),
    ("SI-052", "Kranj", "Municipality"),
    ("SI-053", "Kranjska Gora", "Municipality"),
    ("SI-054", "Krško", "Municipality"),
    ("SI-055", "Kungota", "Municipality"),
    ("SI-056", "Kuzma", "Municipality"),
    ("SI-057", "Laško", "Municipality"),
    ("SI-058", "Lenart", "Municipality"),
    ("SI-059", "Lendava", "Municipality"),
    ("SI-060", "Litija", "Municipality"),
    ("SI-061", "Ljubljana", "Municipality"),
    ("SI-062", "Ljubno", "Municipality"),
    ("SI-063", "Ljutomer", "Municipality"),
    ("SI-064", "Logatec", "Municipality"),
    ("SI-065", "Loška dolina", "Municipality"),
    ("SI-066", "Loški Potok", "Municipality"),
    ("SI-067", "Luče", "Municipality"),
    ("SI-068", "Lukovica", "Municipality"),
    ("SI-069", "Majšperk", "Municipality"),
    ("SI-070", "Maribor", "Municipality"),
    ("SI-071", "Medvode", "Municipality"),
    ("SI-072", "Mengeš", "Municipality"),
    ("SI-073", "Metlika", "Municipality"),
    ("SI-074", "Mežica", "Municipality"),
    ("SI-075", "Miren-Kostanjevica", "Municipality"),
    ("SI-076", "Mislinja", "Municipality"),
    ("SI-077", "Moravče", "Municipality"),
    ("SI-078", "Moravske Toplice", "Municipality"),
    ("SI-079", "Mozirje", "Municipality"),
    ("SI-080", "Murska Sobota", "Municipality"),
    ("SI-081", "Muta", "Municipality"),
    ("SI-082", "Naklo", "Municipality"),
    ("SI-083", "Nazarje", "Municipality"),
    ("SI-084", "Nova Gorica", "Municipality"),
    ("SI-085", "Novo Mesto", "Municipality"),
    ("SI-086", "Odranci", "Municipality"),
    ("SI-087", "Ormož", "Municipality"),
    ("SI-088", "Osilnica", "Municipality"),
    ("SI-089", "Pesnica", "Municipality"),
    ("SI-090", "Piran", "Municipality"),
    ("SI-091", "Pivka", "Municipality"),
    ("SI-092", "Podčetrtek", "Municipality"),
    ("SI-093", "Podvelka", "Municipality"),
    ("SI-094", "Postojna", "Municipality"),
    ("SI-095", "Preddvor", "Municipality"),
    ("SI-096", "Ptuj", "Municipality"),
    ("SI-097", "Puconci", "Municipality"),
    ("SI-098", "Rače-Fram", "Municipality"),
    ("SI-099", "Radeče", "Municipality"),
    ("SI-100", "Radenci", "Municipality"),
    ("SI-101", "Radlje ob Dravi", "Municipality"),
    ("SI-102", "Radovljica", "Municipality"),
    ("SI-103", "Ravne na Koroškem", "Municipality"),
    ("SI-104", "Ribnica", "Municipality"),
    ("SI-105", "Rogašovci", "Municipality"),
    ("SI-106", "Rogaška Slatina", "Municipality"),
    ("SI-107", "Rogatec", "Municipality"),
    ("SI-108", "Ruše", "Municipality"),
    ("SI-109", "Semič", "Municipality"),
    ("SI-110", "Sevnica", "Municipality"),
    ("SI-111", "Sežana", "Municipality"),
    ("SI-112", "Slovenj Gradec", "Municipality"),
    ("SI-113", "Slovenska Bistrica", "Municipality"),
    ("SI-114", "Slovenske Konjice", "Municipality"),
    ("SI-115", "Starše", "Municipality"),
    ("SI-116", "Sveti Jurij ob Ščavnici", "Municipality"),
    ("SI-117", "Šenčur", "Municipality"),
    ("SI-118", "Šentilj", "Municipality"),
    ("SI-119", "Šentjernej", "Municipality"),
    ("SI-120", "Šentjur", "Municipality"),
    ("SI-121", "Škocjan", "Municipality"),
    ("SI-122", "Škofja Loka", "Municipality"),
    ("SI-123", "Škofljica", "Municipality"),
    ("SI-124", "Šmarje pri Jelšah", "Municipality"),
    ("SI-125", "Šmartno ob Paki", "Municipality"),
    ("SI-126", "Šoštanj", "Municipality"),
    ("SI-127", "Štore", "Municipality"),
    ("SI-128", "Tolmin", "Municipality"),
    ("SI-129", "Trbovlje", "Municipality"),
    ("SI-130", "Trebnje", "Municipality"),
    ("SI-131", "Tržič", "Municipality"),
    ("SI-132", "Turnišče", "Municipality"),
    ("SI-133", "Velenje", "Municipality"),
    ("SI-134", "Velike Lašče", "Municipality"),
    ("SI-135", "Videm", "Municipality"),
    ("SI-136", "Vipava", "Municipality"),
    ("SI-137", "Vitanje", "Municipality"),
    ("SI-138", "Vodice", "Municipality"),
    ("SI-139", "Vojnik", "Municipality"),
    ("SI-140", "Vrhnika", "Municipality"),
    ("SI-141", "Vuzenica", "Municipality"),
    ("SI-142", "Zagorje ob Savi", "Municipality"),
    ("SI-143", "Zavrč", "Municipality"),
    ("SI-144", "Zreče", "Municipality"),
    ("SI-146", "Železniki", "Municipality"),
    ("SI-147", "Žiri", "Municipality"),
    ("SI-148", "Benedikt", "Municipality"),
    ("SI-149", "Bistrica ob Sotli", "Municipality"),
    ("SI-150", "Bloke", "Municipality"),
    ("SI-151", "Braslovče", "Municipality"),
    ("SI-152", "Cankova", "Municipality"),
    ("SI-153", "Cerkvenjak", "Municipality"),
    ("SI-154", "Dobje", "Municipality"),
    ("SI-155", "Dobrna", "Municipality"),
    ("SI-156", "Dobrovnik", "Municipality"),
    ("SI-157", "Dolenjske Toplice", "Municipality"),
    ("SI-158", "Grad", "Municipality"),
    ("SI-159", "Hajdina", "Municipality"),
    ("SI-160", "Hoče-Slivnica", "Municipality"),
    ("SI-161", "Hodoš", "Municipality"),
    ("SI-162", "Horjul", "Municipality"),
    ("SI-163", "Jezersko", "Municipality"),
    ("SI-164", "Komenda", "Municipality"),
    ("SI-165", "Kostel", "Municipality"),
    ("SI-166", "Križevci", "Municipality"),
    ("SI-167", "Lovrenc na Pohorju", "Municipality"),
    ("SI-168", "Markovci", "Municipality"),
    ("SI-169", "Miklavž na Dravskem polju", "Municipality"),
    ("SI-170", "Mirna Peč", "Municipality"),
    ("SI-171", "Oplotnica", "Municipality"),
    ("SI-172", "Podlehnik", "Municipality"),
    ("SI-173", "Polzela", "Municipality"),
    ("SI-174", "Prebold", "Municipality"),
    ("SI-175", "Prevalje", "Municipality"),
    ("SI-176", "Razkrižje", "Municipality"),
    ("SI-177", "Ribnica na Pohorju", "Municipality"),
    ("SI-178", "Selnica ob Dravi", "Municipality"),
    ("SI-179", "Sodražica", "Municipality"),
    ("SI-180", "Solčava", "Municipality"),
    ("SI-181", "Sveta Ana", "Municipality"),
    ("SI-182", "Sveti Andraž v Slovenskih goricah", "Municipality"),
    ("SI-183", "Šempeter-Vrtojba", "Municipality"),
    ("SI-184", "Tabor", "Municipality"),
    ("SI-185", "Trnovska Vas", "Municipality"),
    ("SI-186", "Trzin", "Municipality"),
    ("SI-187", "Velika Polana", "Municipality"),
    ("SI-188", "Veržej", "Municipality"),
    ("SI-189", "Vransko", "Municipality"),
    ("SI-190", "Žalec", "Municipality"),
    ("SI-191", "Žetale", "Municipality"),
    ("SI-192", "Žirovnica", "Municipality"),
    ("SI-193", "Žužemberk", "Municipality"),
    ("SI-194", "Šmartno pri Litiji", "Municipality"),
    ("SI-195", "Apače", "Municipality"),
    ("SI-196", "Cirkulane", "Municipality"),
    ("SI-197", "Kosanjevica na Krki", "Municipality"),
    ("SI-198", "Makole", "Municipality"),
    ("SI-199", "Mokronog-Trebelno", "Municipality"),
    ("SI-200", "Poljčane", "Municipality"),
    ("SI-201", "Renče-Vogrsko", "Municipality"),
    ("SI-202", "Središče ob Dravi", "Municipality"),
    ("SI-203", "Straža", "Municipality"),
    ("SI-204", "Sveta Trojica v Slovenskih goricah", "Municipality"),
    ("SI-205", "Sveti Tomaž", "Municipality"),
    ("SI-206", "Šmarješke Toplice", "Municipality"),
    ("SI-207", "Gorje", "Municipality"),
    ("SI-208", "Log-Dragomer", "Municipality"),
    ("SI-209", "Rečica ob Savinji", "Municipality"),
    ("SI-210", "Sveti Jurij v Slovenskih goricah", "Municipality"),
    ("SI-211", "Šentrupert", "Municipality"),
    ("SI-212", "Mirna", "Municipality"),
    ("SI-213", "Ankaran", "Municipality"),
    ("SK-BC", "Banskobystrický kraj", "Region"),
    ("SK-BL", "Bratislavský kraj", "Region"),
    ("SK-KI", "Košický kraj", "Region"),
    ("SK-NI", "Nitriansky kraj", "Region"),
    ("SK-PV", "Prešovský kraj", "Region"),
    ("SK-TA", "Trnavský kraj", "Region"),
    ("SK-TC", "Trenčiansky kraj", "Region"),
    ("SK-ZI", "Žilinský kraj", "Region"),
    ("SL-E", "Eastern", "Province"),
    ("SL-N", "Northern", "Province"),
    ("SL-NW", "North Western", "Province"),
    ("SL-S", "Southern", "Province"),
    ("SL-W", "Western Area (Freetown)", "Area"),
    ("SM-01", "Acquaviva", "Municipality"),
    ("SM-02", "Chiesanuova", "Municipality"),
    ("SM-03", "Domagnano", "Municipality"),
    ("SM-04", "Faetano", "Municipality"),
    ("SM-05", "Fiorentino", "Municipality"),
    ("SM-06", "Borgo Maggiore", "Municipality"),
    ("SM-07", "Città di San Marino", "Municipality"),
    ("SM-08", "Montegiardino", "Municipality"),
    ("SM-09", "Serravalle", "Municipality"),
    ("SN-DB", "Diourbel", "Region"),
    ("SN-DK", "Dakar", "Region"),
    ("SN-FK", "Fatick", "Region"),
    ("SN-KA", "Kaffrine", "Region"),
    ("SN-KD", "Kolda", "Region"),
    ("SN-KE", "Kédougou", "Region"),
    ("SN-KL", "Kaolack", "Region"),
    ("SN-LG", "Louga", "Region"),
    ("SN-MT", "Matam", "Region"),
    ("SN-SE", "Sédhiou", "Region"),
    ("SN-SL", "Saint-Louis", "Region"),
    ("SN-TC", "Tambacounda", "Region"),
    ("SN-TH", "Thiès", "Region"),
    ("SN-ZG", "Ziguinchor", "Region"),
    ("SO-AW", "Awdal", "Region"),
    ("SO-BK", "Bakool", "Region"),
    ("SO-BN", "Banaadir", "Region"),
    ("SO-BR", "Bari", "Region"),
    ("SO-BY", "Bay", "Region"),
    ("SO-GA", "Galguduud", "Region"),
    ("SO-GE", "Gedo", "Region"),
    ("SO-HI", "Hiiraan", "Region"),
    ("SO-JD", "Jubbada Dhexe", "Region"),
    ("SO-JH", "Jubbada Hoose", "Region"),
    ("SO-MU", "Mudug", "Region"),
    ("SO-NU", "Nugaal", "Region"),
    ("SO-SA", "Sanaag", "Region"),
    ("SO-SD", "Shabeellaha Dhexe", "Region"),
    ("SO-SH", "Shabeellaha Hoose", "Region"),
    ("SO-SO", "Sool", "Region"),
    ("SO-TO", "Togdheer", "Region"),
    ("SO-WO", "Woqooyi Galbeed", "Region"),
    ("SR-BR", "Brokopondo", "District"),
    ("SR-CM", "Commewijne", "District"),
    ("SR-CR", "Coronie", "District"),
    ("SR-MA", "Marowijne", "District"),
    ("SR-NI", "Nickerie", "District"),
    ("SR-PM", "Paramaribo", "District"),
    ("SR-PR", "Para", "District"),
    ("SR-SA", "Saramacca", "District"),
    ("SR-SI", "Sipaliwini", "District"),
    ("SR-WA", "Wanica", "District"),
    ("SS-BN", "Northern Bahr el Ghazal", "State"),
    ("SS-BW", "Western Bahr el Ghazal", "State"),
    ("SS-EC", "Central Equatoria", "State"),
    ("SS-EE", "Eastern Equatoria", "State"),
    ("SS-EW", "Western Equatoria", "State"),
    ("SS-JG", "Jonglei", "State"),
    ("SS-LK", "Lakes", "State"),
    ("SS-NU", "Upper Nile", "State"),
    ("SS-UY", "Unity", "State"),
    ("SS-WR", "Warrap", "State"),
    ("ST-01", "Água Grande", "District"),
    ("ST-02", "Cantagalo", "District"),
    ("ST-03", "Caué", "District"),
    ("ST-04", "Lembá", "District"),
    ("ST-05", "Lobata", "District"),
    ("ST-06", "Mé-Zóchi", "District"),
    ("ST-P", "Príncipe", "Autonomous region"),
    ("SV-AH", "Ahuachapán", "Department"),
    ("SV-CA", "Cabañas", "Department"),
    ("SV-CH", "Chalatenango", "Department"),
    ("SV-CU", "Cuscatlán", "Department"),
    ("SV-LI", "La Libertad", "Department"),
    ("SV-MO", "Morazán", "Department"),
    ("SV-PA", "La Paz", "Department"),
    ("SV-SA", "Santa Ana", "Department"),
    ("SV-SM", "San Miguel", "Department"),
    ("SV-SO", "Sonsonate", "Department"),
    ("SV-SS", "San Salvador", "Department"),
    ("SV-SV", "San Vicente", "Department"),
    ("SV-UN", "La Unión", "Department"),
    ("SV-US", "Usulután", "Department"),
    ("SY-DI", "Dimashq", "Province"),
    ("SY-DR", "Dar'ā", "Province"),
    ("SY-DY", "Dayr az Zawr", "Province"),
    ("SY-HA", "Al Ḩasakah", "Province"),
    ("SY-HI", "Ḩimş", "Province"),
    ("SY-HL", "Ḩalab", "Province"),
    ("SY-HM", "Ḩamāh", "Province"),
    ("SY-ID", "Idlib", "Province"),
    ("SY-LA", "Al Lādhiqīyah", "Province"),
    ("SY-QU", "Al Qunayţirah", "Province"),
    ("SY-RA", "Ar Raqqah", "Province"),
    ("SY-RD", "Rīf Dimashq", "Province"),
    ("SY-SU", "As Suwaydā'", "Province"),
    ("SY-TA", "Ţarţūs", "Province"),
    ("SZ-HH", "Hhohho", "Region"),
    ("SZ-LU", "Lubombo", "Region"),
    ("SZ-MA", "Manzini", "Region"),
    ("SZ-SH", "Shiselweni", "Region"),
    ("TD-BA", "Al Baţḩā’", "Province"),
    ("TD-BG", "Bahr el Ghazal", "Province"),
    ("TD-BO", "Borkou", "Province"),
    ("TD-CB", "Chari-Baguirmi", "Province"),
    ("TD-EE", "Ennedi-Est", "Province"),
    ("TD-EO", "Ennedi-Ouest", "Province"),
    ("TD-GR", "Guéra", "Province"),
    ("TD-HL", "Hadjer Lamis", "Province"),
    ("TD-KA", "Kanem", "Province"),
    ("TD-LC", "Al Buḩayrah", "Province"),
    ("TD-LO", "Logone-Occidental", "Province"),
    ("TD-LR", "Logone-Oriental", "Province"),
    ("TD-MA", "Mandoul", "Province"),
    ("TD-MC", "Moyen-Chari", "Province"),
    ("TD-ME", "Mayo-Kebbi-Est", "Province"),
    ("TD-MO", "Mayo-Kebbi-Ouest", "Province"),
    ("TD-ND", "Madīnat Injamīnā", "Province"),
    ("TD-OD", "Ouaddaï", "Province"),
    ("TD-SA", "Salamat", "Province"),
    ("TD-SI", "Sila", "Province"),
    ("TD-TA", "Tandjilé", "Province"),
    ("TD-TI", "Tibastī", "Province"),
    ("TD-WF", "Wadi Fira", "Province"),
    ("TG-C", "Centrale", "Region"),
    ("TG-K", "Kara", "Region"),
    ("TG-M", "Maritime (Région)", "Region"),
    ("TG-P", "Plateaux", "Region"),
    ("TG-S", "Savanes", "Region"),
    ("TH-10", "Krung Thep Maha Nakhon", "Metropolitan administration"),
    ("TH-11", "Samut Prakan", "Province"),
    ("TH-12", "Nonthaburi", "Province"),
    ("TH-13", "Pathum Thani", "Province"),
    ("TH-14", "Phra Nakhon Si Ayutthaya", "Province"),
    ("TH-15", "Ang Thong", "Province"),
    ("TH-16", "Lop Buri", "Province"),
    ("TH-17", "Sing Buri", "Province"),
    ("TH-18", "Chai Nat", "Province"),
    ("TH-19", "Saraburi", "Province"),
    ("TH-20", "Chon Buri", "Province"),
    ("TH-21", "Rayong", "Province"),
    ("TH-22", "Chanthaburi", "Province"),
    ("TH-23", "Trat", "Province"),
    ("TH-24", "Chachoengsao", "Province"),
    ("TH-25", "Prachin Buri", "Province"),
    ("TH-26", "Nakhon Nayok", "Province"),
    ("TH-27", "Sa Kaeo", "Province"),
    ("TH-30", "Nakhon Ratchasima", "Province"),
    ("TH-31", "Buri Ram", "Province"),
    ("TH-32", "Surin", "Province"),
    ("TH-33", "Si Sa Ket", "Province"),
    ("TH-34", "Ubon Ratchathani", "Province"),
    ("TH-35", "Yasothon", "Province"),
    ("TH-36", "Chaiyaphum", "Province"),
    ("TH-37", "Amnat Charoen", "Province"),
    ("TH-38", "Bueng Kan", "Province"),
    ("TH-39", "Nong Bua Lam Phu", "Province"),
    ("TH-40", "Khon Kaen", "Province"),
    ("TH-41", "Udon Thani", "Province"),
    ("TH-42", "Loei", "Province"),
    ("TH-43", "Nong Khai", "Province"),
    ("TH-44", "Maha Sarakham", "Province"),
    ("TH-45", "Roi Et", "Province"),
    ("TH-46", "Kalasin", "Province"),
    ("TH-47", "Sakon Nakhon", "Province"),
    ("TH-48", "Nakhon Phanom", "Province"),
    ("TH-49", "Mukdahan", "Province"),
    ("TH-50", "Chiang Mai", "Province"),
    ("TH-51", "Lamphun", "Province"),
    ("TH-52", "Lampang", "Province"),
    ("TH-53", "Uttaradit", "Province"),
    ("TH-54", "Phrae", "Province"),
    ("TH-55", "Nan", "Province"),
    ("TH-56", "Phayao", "Province"),
    ("TH-57", "Chiang Rai", "Province"),
    ("TH-58", "Mae Hong Son", "Province"),
    ("TH-60", "Nakhon Sawan", "Province"),
    ("TH-61", "Uthai Thani", "Province"),
    ("TH-62", "Kamphaeng Phet", "Province"),
    ("TH-63", "Tak", "Province"),
    ("TH-64", "Sukhothai", "Province"),
    ("TH-65", "Phitsanulok", "Province"),
    ("TH-66", "Phichit", "Province"),
    ("TH-67", "Phetchabun", "Province"),
    ("TH-70", "Ratchaburi", "Province"),
    ("TH-71", "Kanchanaburi", "Province"),
    ("TH-72", "Suphan Buri", "Province"),
    ("TH-73", "Nakhon Pathom", "Province"),
    ("TH-74", "Samut Sakhon", "Province"),
    ("TH-75", "Samut Songkhram", "Province"),
    ("TH-76", "Phetchaburi", "Province"),
    ("TH-77", "Prachuap Khiri Khan", "Province"),
    ("TH-80", "Nakhon Si Thammarat", "Province"),
    ("TH-81", "Krabi", "Province"),
    ("TH-82", "Phangnga", "Province"),
    ("TH-83", "Phuket", "Province"),
    ("TH-84", "Surat Thani", "Province"),
    ("TH-85", "Ranong", "Province"),
    ("TH-86", "Chumphon", "Province"),
    ("TH-90", "Songkhla", "Province"),
    ("TH-91", "Satun", "Province"),
    ("TH-92", "Trang", "Province"),
    ("TH-93", "Phatthalung", "Province"),
    ("TH-94", "Pattani", "Province"),
    ("TH-95", "Yala", "Province"),
    ("TH-96", "Narathiwat", "Province"),
    ("TH-S", "Phatthaya", "Special administrative city"),
    ("TJ-DU", "Dushanbe", "Capital territory"),
    ("TJ-GB", "Kŭhistoni Badakhshon", "Autonomous region"),
    ("TJ-KT", "Khatlon", "Region"),
    ("TJ-RA", "nohiyahoi tobei jumhurí", "Districts under republic administration"),
    ("TJ-SU", "Sughd", "Region"),
    ("TL-AL", "Aileu", "Municipality"),
    ("TL-AN", "Ainaro", "Municipality"),
    ("TL-BA", "Baucau", "Municipality"),
    ("TL-BO", "Bobonaro", "Municipality"),
    ("TL-CO", "Cova Lima", "Municipality"),
    ("TL-DI", "Díli", "Municipality"),
    ("TL-ER", "Ermera", "Municipality"),
    ("TL-LA", "Lautein", "Municipality"),
    ("TL-LI", "Likisá", "Municipality"),
    ("TL-MF", "Manufahi", "Municipality"),
    ("TL-MT", "Manatuto", "Municipality"),
    ("TL-OE", "Oekusi-Ambenu", "Special administrative region"),
    ("TL-VI", "Vikeke", "Municipality"),
    ("TM-A", "Ahal", "Region"),
    ("TM-B", "Balkan", "Region"),
    ("TM-D", "Daşoguz", "Region"),
    ("TM-L", "Lebap", "Region"),
    ("TM-M", "Mary", "Region"),
    ("TM-S", "Aşgabat", "City"),
    ("TN-11", "Tunis", "Governorate"),
    ("TN-12", "L'Ariana", "Governorate"),
    ("TN-13", "Ben Arous", "Governorate"),
    ("TN-14", "La Manouba", "Governorate"),
    ("TN-21", "Nabeul", "Governorate"),
    ("TN-22", "Zaghouan", "Governorate"),
    ("TN-23", "Bizerte", "Governorate"),
    ("TN-31", "Béja", "Governorate"),
    ("TN-32", "Jendouba", "Governorate"),
    ("TN-33", "Le Kef", "Governorate"),
    ("TN-34", "Siliana", "Governorate"),
    ("TN-41", "Kairouan", "Governorate"),
    ("TN-42", "Kasserine", "Governorate"),
    ("TN-43", "Sidi Bouzid", "Governorate"),
    ("TN-51", "Sousse", "Governorate"),
    ("TN-52", "Monastir", "Governorate"),
    ("TN-53", "Mahdia", "Governorate"),
    ("TN-61", "Sfax", "Governorate"),
    ("TN-71", "Gafsa", "Governorate"),
    ("TN-72", "Tozeur", "Governorate"),
    ("TN-73", "Kébili", "Governorate"),
    ("TN-81", "Gabès", "Governorate"),
    ("TN-82", "Médenine", "Governorate"),
    ("TN-83", "Tataouine", "Governorate"),
    ("TO-01", "'Eua", "Division"),
    ("TO-02", "Ha'apai", "Division"),
    ("TO-03", "Niuas", "Division"),
    ("TO-04", "Tongatapu", "Division"),
    ("TO-05", "Vava'u", "Division"),
    ("TR-01", "Adana", "Province"),
    ("TR-02", "Adıyaman", "Province"),
    ("TR-03", "Afyonkarahisar", "Province"),
    ("TR-04", "Ağrı", "Province"),
    ("TR-05", "Amasya", "Province"),
    ("TR-06", "Ankara", "Province"),
    ("TR-07", "Antalya", "Province"),
    ("TR-08", "Artvin", "Province"),
    ("TR-09", "Aydın", "Province"),
    ("TR-10", "Balıkesir", "Province"),
    ("TR-11", "Bilecik", "Province"),
    ("TR-12", "Bingöl", "Province"),
    ("TR-13", "Bitlis", "Province"),
    ("TR-14", "Bolu", "Province"),
    ("TR-15", "Burdur", "Province"),
    ("TR-16", "Bursa", "Province"),
    ("TR-17", "Çanakkale", "Province"),
    ("TR-18", "Çankırı", "Province"),
    ("TR-19", "Çorum", "Province"),
    ("TR-20", "Denizli", "Province"),
    ("TR-21", "Diyarbakır", "Province"),
    ("TR-22", "Edirne", "Province"),
    ("TR-23", "Elazığ", "Province"),
    ("TR-24", "Erzincan", "Province"),
    ("TR-25", "Erzurum", "Province"),
    ("TR-26", "Eskişehir", "Province"),
    ("TR-27", "Gaziantep", "Province"),
    ("TR-28", "Giresun", "Province"),
    ("TR-29", "Gümüşhane", "Province"),
    ("TR-30", "Hakkâri", "Province"),
    ("TR-31", "Hatay", "Province"),
    ("TR-32", "Isparta", "Province"),
    ("TR-33", "Mersin", "Province"),
    ("TR-34", "İstanbul", "Province"),
    ("TR-35", "İzmir", "Province"),
    ("TR-36", "Kars", "Province"),
    ("TR-37", "Kastamonu", "Province"),
    ("TR-38", "Kayseri", "Province"),
    ("TR-39", "Kırklareli", "Province"),
    ("TR-40", "Kırşehir", "Province"),
    ("TR-41", "Kocaeli", "Province"),
    ("TR-42", "Konya", "Province"),
    ("TR-43", "Kütahya", "Province"),
    ("TR-44", "Malatya", "Province"),
    ("TR-45", "Manisa", "Province"),
    ("TR-46", "Kahramanmaraş", "Province"),
    ("TR-47", "Mardin", "Province"),
    ("TR-48", "Muğla", "Province"),
    ("TR-49", "Muş", "Province"),
    ("TR-50", "Nevşehir", "Province"),
    ("TR-51", "Niğde", "Province"),
    ("TR-52", "Ordu", "Province"),
    ("TR-53", "Rize", "Province"),
    ("TR-54", "Sakarya", "Province"),
    ("TR-55", "Samsun", "Province"),
    ("TR-56", "Siirt", "Province"),
    ("TR-57", "Sinop", "Province"),
    ("TR-58", "Sivas", "Province"),
    ("TR-59", "Tekirdağ", "Province"),
    ("TR-60", "Tokat", "Province"),
    ("TR-61", "Trabzon", "Province"),
    ("TR-62", "Tunceli", "Province"),
    ("TR-63", "Şanlıurfa", "Province"),
    ("TR-64", "Uşak", "Province"),
    ("TR-65", "Van", "Province"),
    ("TR-66", "Yozgat", "Province"),
    ("TR-67", "Zonguldak", "Province"),
    ("TR-68", "Aksaray", "Province"),
    ("TR-69", "Bayburt", "Province"),
    ("TR-70", "Karaman", "Province"),
    ("TR-71", "Kırıkkale", "Province"),
    ("TR-72", "Batman", "Province"),
    ("TR-73", "Şırnak", "Province"),
    ("TR-74", "Bartın", "Province"),
    ("TR-75", "Ardahan", "Province"),
    ("TR-76", "Iğdır", "Province"),
    ("TR-77", "Yalova", "Province"),
    ("TR-78", "Karabük", "Province"),
    ("TR-79", "Kilis", "Province"),
    ("TR-80", "Osmaniye", "Province"),
    ("TR-81", "Düzce", "Province"),
    ("TT-ARI", "Arima", "Borough"),
    ("TT-CHA", "Chaguanas", "Borough"),
    ("TT-CTT", "Couva-Tabaquite-Talparo", "Region"),
    ("TT-DMN", "Diego Martin", "Region"),
    ("TT-MRC", "Mayaro-Rio Claro", "Region"),
    ("TT-PED", "Penal-Debe", "Region"),
    ("TT-POS", "Port of Spain", "City"),
    ("TT-PRT", "Princes Town", "Region"),
    ("TT-PTF", "Point Fortin", "Borough"),
    ("TT-SFO", "San Fernando", "City"),
    ("TT-SGE", "Sangre Grande", "Region"),
    ("TT-SIP", "Siparia", "Region"),
    ("TT-SJL", "San Juan-Laventille", "Region"),
    ("TT-TOB", "Tobago", "Ward"),
    ("TT-TUP", "Tunapuna-Piarco", "Region"),
    ("TV-FUN", "Funafuti", "Town council"),
    ("TV-NIT", "Niutao", "Island council"),
    ("TV-NKF", "Nukufetau", "Island council"),
    ("TV-NKL", "Nukulaelae", "Island council"),
    ("TV-NMA", "Nanumea", "Island council"),
    ("TV-NMG", "Nanumaga", "Island council"),
    ("TV-NUI", "Nui", "Island council"),
    ("TV-VAI", "Vaitupu", "Island council"),
    ("TW-CHA", "Changhua", "County"),
    ("TW-CYI", "Chiayi", "City"),
    ("TW-CYQ", "Chiayi", "County"),
    ("TW-HSQ", "Hsinchu", "County"),
    ("TW-HSZ", "Hsinchu", "City"),
    ("TW-HUA", "Hualien", "County"),
    ("TW-ILA", "Yilan", "County"),
    ("TW-KEE", "Keelung", "City"),
    ("TW-KHH", "Kaohsiung", "Special municipality"),
    ("TW-KIN", "Kinmen", "County"),
    ("TW-LIE", "Lienchiang", "County"),
    ("TW-MIA", "Miaoli", "County"),
    ("TW-NAN", "Nantou", "County"),
    ("TW-NWT", "New Taipei", "Special municipality"),
    ("TW-PEN", "Penghu", "County"),
    ("TW-PIF", "Pingtung", "County"),
    ("TW-TAO", "Taoyuan", "Special municipality"),
    ("TW-TNN", "Tainan", "Special municipality"),
    ("TW-TPE", "Taipei", "Special municipality"),
    ("TW-TTT", "Taitung", "County"),
    ("TW-TXG", "Taichung", "Special municipality"),
    ("TW-YUN", "Yunlin", "County"),
    ("TZ-01", "Arusha", "Region"),
    ("TZ-02", "Dar es Salaam", "Region"),
    ("TZ-03", "Dodoma", "Region"),
    ("TZ-04", "Iringa", "Region"),
    ("TZ-05", "Kagera", "Region"),
    ("TZ-06", "Pemba North", "Region"),
    ("TZ-07", "Zanzibar North", "Region"),
    ("TZ-08", "Kigoma", "Region"),
    ("TZ-09", "Kilimanjaro", "Region"),
    ("TZ-10", "Pemba South", "Region"),
    ("TZ-11", "Zanzibar South", "Region"),
    ("TZ-12", "Lindi", "Region"),
    ("TZ-13", "Mara", "Region"),
    ("TZ-14", "Mbeya", "Region"),
    ("TZ-15", "Zanzibar West", "Region"),
    ("TZ-16", "Morogoro", "Region"),
    ("TZ-17", "Mtwara", "Region"),
    ("TZ-18", "Mwanza", "Region"),
    ("TZ-19", "Coast", "Region"),
    ("TZ-20", "Rukwa", "Region"),
    ("TZ-21", "Ruvuma", "Region"),
    ("TZ-22", "Shinyanga", "Region"),
    ("TZ-23", "Singida", "Region"),
    ("TZ-24", "Tabora", "Region"),
    ("TZ-25", "Tanga", "Region"),
    ("TZ-26", "Manyara", "Region"),
    ("TZ-27", "Geita", "Region"),
    ("TZ-28", "Katavi", "Region"),
    ("TZ-29", "Njombe", "Region"),
    ("TZ-30", "Simiyu", "Region"),
    ("TZ-31", "Songwe", "Region"),
    ("UA-05", "Vinnytska oblast", "Region"),
    ("UA-07", "Volynska oblast", "Region"),
    ("UA-09", "Luhanska oblast", "Region"),
    ("UA-12", "Dnipropetrovska oblast", "Region"),
    ("UA-14", "Donetska oblast", "Region"),
    ("UA-18", "Zhytomyrska oblast", "Region"),
    ("UA-21", "Zakarpatska oblast", "Region"),
    ("UA-23", "Zaporizka oblast", "Region"),
    ("UA-26", "Ivano-Frankivska oblast", "Region"),
    ("UA-30", "Kyiv", "City"),
    ("UA-32", "Kyivska oblast", "Region"),
    ("UA-35", "Kirovohradska oblast", "Region"),
    ("UA-40", "Sevastopol", "City"),
    ("UA-43", "Avtonomna Respublika Krym", "Republic"),
    ("UA-46", "Lvivska oblast", "Region"),
    ("UA-48", "Mykolaivska oblast", "Region"),
    ("UA-51", "Odeska oblast", "Region"),
    ("UA-53", "Poltavska oblast", "Region"),
    ("UA-56", "Rivnenska oblast", "Region"),
    ("UA-59", "Sumska oblast", "Region"),
    ("UA-61", "Ternopilska oblast", "Region"),
    ("UA-63", "Kharkivska oblast", "Region"),
    ("UA-65", "Khersonska oblast", "Region"),
    ("UA-68", "Khmelnytska oblast", "Region"),
    ("UA-71", "Cherkaska oblast", "Region"),
    ("UA-74", "Chernihivska oblast", "Region"),
    ("UA-77", "Chernivetska oblast", "Region"),
    ("UG-101", "Kalangala", "District"),
    ("UG-102", "Kampala", "City"),
    ("UG-103", "Kiboga", "District"),
    ("UG-104", "Luwero", "District"),
    ("UG-105", "Masaka", "District"),
    ("UG-106", "Mpigi", "District"),
    ("UG-107", "Mubende", "District"),
    ("UG-108", "Mukono", "District"),
    ("UG-109", "Nakasongola", "District"),
    ("UG-110", "Rakai", "District"),
    ("UG-111", "Sembabule", "District"),
    ("UG-112", "Kayunga", "District"),
    ("UG-113", "Wakiso", "District"),
    ("UG-114", "Lyantonde", "District"),
    ("UG-115", "Mityana", "District"),
    ("UG-116", "Nakaseke", "District"),
    ("UG-117", "Buikwe", "District"),
    ("UG-118", "Bukomansibi", "District"),
    ("UG-119", "Butambala", "District"),
    ("UG-120", "Buvuma", "District"),
    ("UG-121", "Gomba", "District"),
    ("UG-122", "Kalungu", "District"),
    ("UG-123", "Kyankwanzi", "District"),
    ("UG-124", "Lwengo", "District"),
    ("UG-125", "Kyotera", "District"),
    ("UG-126", "Kasanda", "District"),
    ("UG-201", "Bugiri", "District"),
    ("UG-202", "Busia", "District"),
    ("UG-203", "Iganga", "District"),
    ("UG-204", "Jinja", "District"),
    ("UG-205", "Kamuli", "District"),
    ("UG-206", "Kapchorwa", "District"),
    ("UG-207", "Katakwi", "District"),
    ("UG-208", "Kumi", "District"),
    ("UG-209", "Mbale", "District"),
    ("UG-210", "Pallisa", "District"),
    ("UG-211", "Soroti", "District"),
    ("UG-212", "Tororo", "District"),
    ("UG-213", "Kaberamaido", "District"),
    ("UG-214", "Mayuge", "District"),
    ("UG-215", "Sironko", "District"),
    ("UG-216", "Amuria", "District"),
    ("UG-217", "Budaka", "District"),
    ("UG-218", "Bududa", "District"),
    ("UG-219", "Bukedea", "District"),
    ("UG-220", "Bukwo", "District"),
    ("UG-221", "Butaleja", "District"),
    ("UG-222", "Kaliro", "District"),
    ("UG-223", "Manafwa", "District"),
    ("UG-224", "Namutumba", "District"),
    ("UG-225", "Bulambuli", "District"),
    ("UG-226", "Buyende", "District"),
    ("UG-227", "Kibuku", "District"),
    ("UG-228", "Kween", "District"),
    ("UG-229", "Luuka", "District"),
    ("UG-230", "Namayingo", "District"),
    ("UG-231", "Ngora", "District"),
    ("UG-232", "Serere", "District"),
    ("UG-233", "Butebo", "District"),
    ("UG-234", "Namisindwa", "District"),
    ("UG-235", "Bugweri", "District"),
    ("UG-236", "Kapelebyong", "District"),
    ("UG-237", "Kalaki", "District"),
    ("UG-301", "Adjumani", "District"),
    ("UG-302", "Apac", "District"),
    ("UG-303", "Arua", "District"),
    ("UG-304", "Gulu", "District"),
    ("UG-305", "Kitgum", "District"),
    ("UG-306", "Kotido", "District"),
    ("UG-307", "Lira", "District"),
    ("UG-308", "Moroto", "District"),
    ("UG-309", "Moyo", "District"),
    ("UG-310", "Nebbi", "District"),
    ("UG-311", "Nakapiripirit", "District"),
    ("UG-312", "Pader", "District"),
    ("UG-313", "Yumbe", "District"),
    ("UG-314", "Abim", "District"),
    ("UG-315", "Amolatar", "District"),
    ("UG-316", "Amuru", "District"),
    ("UG-317", "Dokolo", "District"),
    ("UG-318", "Kaabong", "District"),
    ("UG-319", "Koboko", "District"),
    ("UG-320", "Maracha", "District"),
    ("UG-321", "Oyam", "District"),
    ("UG-322", "Agago", "District"),
    ("UG-323", "Alebtong", "District"),
    ("UG-324", "Amudat", "District"),
    ("UG-325", "Kole", "District"),
    ("UG-326", "Lamwo", "District"),
    ("UG-327", "Napak", "District"),
    ("UG-328", "Nwoya", "District"),
    ("UG-329", "Otuke", "District"),
    ("UG-330", "Zombo", "District"),
    ("UG-331", "Omoro", "District"),
    ("UG-332", "Pakwach", "District"),
    ("UG-333", "Kwania", "District"),
    ("UG-334", "Nabilatuk", "District"),
    ("UG-335", "Karenga", "District"),
    ("UG-336", "Madi-Okollo", "District"),
    ("UG-337", "Obongi", "District"),
    ("UG-401", "Bundibugyo", "District"),
    ("UG-402", "Bushenyi", "District"),
    ("UG-403", "Hoima", "District"),
    ("UG-404", "Kabale", "District"),
    ("UG-405", "Kabarole", "District"),
    ("UG-406", "Kasese", "District"),
    ("UG-407", "Kibaale", "District"),
    ("UG-408", "Kisoro", "District"),
    ("UG-409", "Masindi", "District"),
    ("UG-410", "Mbarara", "District"),
    ("UG-411", "Ntungamo", "District"),
    ("UG-412", "Rukungiri", "District"),
    ("UG-413", "Kamwenge", "District"),
    ("UG-414", "Kanungu", "District"),
    ("UG-415", "Kyenjojo", "District"),
    ("UG-416", "Buliisa", "District"),
    ("UG-417", "Ibanda", "District"),
    ("UG-418", "Isingiro", "District"),
    ("UG-419", "Kiruhura", "District"),
    ("UG-420", "Buhweju", "District"),
    ("UG-421", "Kiryandongo", "District"),
    ("UG-422", "Kyegegwa", "District"),
    ("UG-423", "Mitooma", "District"),
    ("UG-424", "Ntoroko", "District"),
    ("UG-425", "Rubirizi", "District"),
    ("UG-426", "Sheema", "District"),
    ("UG-427", "Kagadi", "District"),
    ("UG-428", "Kakumiro", "District"),
    ("UG-429", "Rubanda", "District"),
    ("UG-430", "Bunyangabu", "District"),
    ("UG-431", "Rukiga", "District"),
    ("UG-432", "Kikuube", "District"),
    ("UG-433", "Kazo", "District"),
    ("UG-434", "Kitagwenda", "District"),
    ("UG-435", "Rwampara", "District"),
    ("UG-C", "Central", "Geographical region"),
    ("UG-E", "Eastern", "Geographical region"),
    ("UG-N", "Northern", "Geographical region"),
    ("UG-W", "Western", "Geographical region"),
    ("UM-67", "Johnston Atoll", "Islands, groups of islands"),
    ("UM-71", "Midway Islands", "Islands, groups of islands"),
    ("UM-76", "Navassa Island", "Islands, groups of islands"),
    ("UM-79", "Wake Island", "Islands, groups of islands"),
    ("UM-81", "Baker Island", "Islands, groups of islands"),
    ("UM-84", "Howland Island", "Islands, groups of islands"),
    ("UM-86", "Jarvis Island", "Islands, groups of islands"),
    ("UM-89", "Kingman Reef", "Islands, groups of islands"),
    ("UM-95", "Palmyra Atoll", "Islands, groups of islands"),
    ("US-AK", "Alaska", "State"),
    ("US-AL", "Alabama", "State"),
    ("US-AR", "Arkansas", "State"),
    ("US-AS", "American Samoa", "Outlying area"),
    ("US-AZ", "Arizona", "State"),
    ("US-CA", "California", "State"),
    ("US-CO", "Colorado", "State"),
    ("US-CT", "Connecticut", "State"),
    ("US-DC", "District of Columbia", "District"),
    ("US-DE", "Delaware", "State"),
    ("US-FL", "Florida", "State"),
    ("US-GA", "Georgia", "State"),
    ("US-GU", "Guam", "Outlying area"),
    ("US-HI", "Hawaii", "State"),
    ("US-IA", "Iowa", "State"),
    ("US-ID", "Idaho", "State"),
    ("US-IL", "Illinois", "State"),
    ("US-IN", "Indiana", "State"),
    ("US-KS", "Kansas", "State"),
    ("US-KY", "Kentucky", "State"),
    ("US-LA", "Louisiana", "State"),
    ("US-MA", "Massachusetts", "State"),
    ("US-MD", "Maryland", "State"),
    ("US-ME", "Maine", "State"),
    ("US-MI", "Michigan", "State"),
    ("US-MN", "Minnesota", "State"),
    ("US-MO", "Missouri", "State"),
    ("US-MP", "Northern Mariana Islands", "Outlying area"),
    ("US-MS", "Mississippi", "State"),
    ("US-MT", "Montana", "State"),
    ("US-NC", "North Carolina", "State"),
    ("US-ND", "North Dakota", "State"),
    ("US-NE", "Nebraska", "State"),
    ("US-NH", "New Hampshire", "State"),
    ("US-NJ", "New Jersey", "State"),
    ("US-NM", "New Mexico", "State"),
    ("US-NV", "Nevada", "State"),
    ("US-NY", "New York", "State"),
    ("US-OH", "Ohio", "State"),
    ("US-OK", "Oklahoma", "State"),
    ("US-OR", "Oregon", "State"),
    ("US-PA", "Pennsylvania", "State"),
    ("US-PR", "Puerto Rico", "Outlying area"),
    ("US-RI", "Rhode Island", "State"),
    ("US-SC", "South Carolina", "State"),
    ("US-SD", "South Dakota", "State"),
    ("US-TN", "Tennessee", "State"),
    ("US-TX", "Texas", "State"),
    ("US-UM", "United States Minor Outlying Islands", "Outlying area"),
    ("US-UT", "Utah", "State"),
    ("US-VA", "Virginia", "State"),
    ("US-VI", "Virgin Islands, U.S.", "Outlying area"),
    ("US-VT", "Vermont", "State"),
    ("US-WA", "Washington", "State"),
    ("US-WI", "Wisconsin", "State"),
    ("US-WV", "West Virginia", "State"),
    ("US-WY", "Wyoming", "State"),
    ("UY-AR", "Artigas", "Department"),
    ("UY-CA", "Canelones", "Department"),
    ("UY-CL", "Cerro Largo", "Department"),
    ("UY-CO", "Colonia", "Department"),
    ("UY-DU", "Durazno", "Department"),
    ("UY-FD", "Florida", "Department"),
    ("UY-FS", "Flores", "Department"),
    ("UY-LA", "Lavalleja", "Department"),
    ("UY-MA", "Maldonado", "Department"),
    ("UY-MO", "Montevideo", "Department"),
    ("UY-PA", "Paysandú", "Department"),
    ("UY-RN", "Río Negro", "Department"),
    ("UY-RO", "Rocha", "Department"),
    ("UY-RV", "Rivera", "Department"),
    ("UY-SA", "Salto", "Department"),
    ("UY-SJ", "San José", "Department"),
    ("UY-SO", "Soriano", "Department"),
    ("UY-TA", "Tacuarembó", "Department"),
    ("UY-TT", "Treinta y Tres", "Department"),
    ("UZ-AN", "Andijon", "Region"),
    ("UZ-BU", "Buxoro", "Region"),
    ("UZ-FA", "Farg‘ona", "Region"),
    ("UZ-JI", "Jizzax", "Region"),
    ("UZ-NG", "Namangan", "Region"),
    ("UZ-NW", "Navoiy", "Region"),
    ("UZ-QA", "Qashqadaryo", "Region"),
    ("UZ-QR", "Qoraqalpog‘iston Respublikasi", "Republic"),
    ("UZ-SA", "Samarqand", "Region"),
    ("UZ-SI", "Sirdaryo", "Region"),
    ("UZ-SU", "Surxondaryo", "Region"),
    ("UZ-TK", "Toshkent", "City"),
    ("UZ-TO", "Toshkent", "Region"),
    ("UZ-XO", "Xorazm", "Region"),
    ("VC-01", "Charlotte", "Parish"),
    ("VC-02", "Saint Andrew", "Parish"),
    ("VC-03", "Saint David", "Parish"),
    ("VC-04", "Saint George", "Parish"),
    ("VC-05", "Saint Patrick", "Parish"),
    ("VC-06", "Grenadines", "Parish"),
    ("VE-A", "Distrito Capital", "Capital district"),
    ("VE-B", "Anzoátegui", "State"),
    ("VE-C", "Apure", "State"),
    ("VE-D", "Aragua", "State"),
    ("VE-E", "Barinas", "State"),
    ("VE-F", "Bolívar", "State"),
    ("VE-G", "Carabobo", "State"),
    ("VE-H", "Cojedes", "State"),
    ("VE-I", "Falcón", "State"),
    ("VE-J", "Guárico", "State"),
    ("VE-K", "Lara", "State"),
    ("VE-L", "Mérida", "State"),
    ("VE-M", "Miranda", "State"),
    ("VE-N", "Monagas", "State"),
    ("VE-O", "Nueva Esparta", "State"),
    ("VE-P", "Portuguesa", "State"),
    ("VE-R", "Sucre", "State"),
    ("VE-S", "Táchira", "State"),
    ("VE-T", "Trujillo", "State"),
    ("VE-U", "Yaracuy", "State"),
    ("VE-V", "Zulia", "State"),
    ("VE-W", "Dependencias Federales", "Federal dependency"),
    ("VE-X", "La Guaira", "State"),
    ("VE-Y", "Delta Amacuro", "State"),
    ("VE-Z", "Amazonas", "State"),
    ("VN-01", "Lai Châu", "Province"),
    ("VN-02", "Lào Cai", "Province"),
    ("VN-03", "Hà Giang", "Province"),
    ("VN-04", "Cao Bằng", "Province"),
    ("VN-05", "Sơn La", "Province"),
    ("VN-06", "Yên Bái", "Province"),
    ("VN-07", "Tuyên Quang", "Province"),
    ("VN-09", "Lạng Sơn", "Province"),
    ("VN-13", "Quảng Ninh", "Province"),
    ("VN-14", "Hòa Bình", "Province"),
    ("VN-18", "Ninh Bình", "Province"),
    ("VN-20", "Thái Bình", "Province"),
    ("VN-21", "Thanh Hóa", "Province"),
    ("VN-22", "Nghệ An", "Province"),
    ("VN-23", "Hà Tĩnh", "Province"),
    ("VN-24", "Quảng Bình", "Province"),
    ("VN-25", "Quảng Trị", "Province"),
    ("VN-26", "Thừa Thiên-Huế", "Province"),
    ("VN-27", "Quảng Nam", "Province"),
    ("VN-28", "Kon Tum", "Province"),
    ("VN-29", "Quảng Ngãi", "Province"),
    ("VN-30", "Gia Lai", "Province"),
    ("VN-31", "Bình Định", "Province"),
    ("VN-32", "Phú Yên", "Province"),
    ("VN-33", "Đắk Lắk", "Province"),
    ("VN-34", "Khánh Hòa", "Province"),
    ("VN-35", "Lâm Đồng", "Province"),
    ("VN-36", "Ninh Thuận", "Province"),
    ("VN-37", "Tây Ninh", "Province"),
    ("VN-39", "Đồng Nai", "Province"),
    ("VN-40", "Bình Thuận", "Province"),
    ("VN-41", "Long An", "Province"),
    ("VN-43", "Bà Rịa - Vũng Tàu", "Province"),
    ("VN-44", "An Giang", "Province"),
    ("VN-45", "Đồng Tháp", "Province"),
    ("VN-46", "Tiền Giang", "Province"),
    ("VN-47", "Kiến Giang", "Province"),
    ("VN-49", "Vĩnh Long", "Province"),
    ("VN-50", "Bến Tre", "Province"),
    ("VN-51", "Trà Vinh", "Province"),
    ("VN-52", "Sóc Trăng", "Province"),
    ("VN-53", "Bắc Kạn", "Province"),
    ("VN-54", "Bắc Giang", "Province"),
    ("VN-55", "Bạc Liêu", "Province"),
    ("VN-56", "Bắc Ninh", "Province"),
    ("VN-57", "Bình Dương", "Province"),
    ("VN-58", "Bình Phước", "Province"),
    ("VN-59", "Cà Mau", "Province"),
    ("VN-61", "Hải Dương", "Province"),
    ("VN-63", "Hà Nam", "Province"),
    ("VN-66", "Hưng Yên", "Province"),
    ("VN-67", "Nam Định", "Province"),
    ("VN-68", "Phú Thọ", "Province"),
    ("VN-69", "Thái Nguyên", "Province"),
    ("VN-70", "Vĩnh Phúc", "Province"),
    ("VN-71", "Điện Biên", "Province"),
    ("VN-72", "Đắk Nông", "Province"),
    ("VN-73", "Hậu Giang", "Province"),
    ("VN-CT", "Cần Thơ", "Municipality"),
    ("VN-DN", "Đà Nẵng", "Municipality"),
    ("VN-HN", "Hà Nội", "Municipality"),
    ("VN-HP", "Hải Phòng", "Municipality"),
    ("VN-SG", "Hồ Chí Minh", "Municipality"),
    ("VU-MAP", "Malampa", "Province"),
    ("VU-PAM", "Pénama", "Province"),
    ("VU-SAM", "Sanma", "Province"),
    ("VU-SEE", "Shéfa", "Province"),
    ("VU-TAE", "Taféa", "Province"),
    ("VU-TOB", "Torba", "Province"),
    ("WF-AL", "Alo", "Administrative precinct"),
    ("WF-SG", "Sigave", "Administrative precinct"),
    ("WF-UV", "Uvea", "Administrative precinct"),
    ("WS-AA", "A'ana", "District"),
    ("WS-AL", "Aiga-i-le-Tai", "District"),
    ("WS-AT", "Atua", "District"),
    ("WS-FA", "Fa'asaleleaga", "District"),
    ("WS-GE", "Gaga'emauga", "District"),
    ("WS-GI", "Gagaifomauga", "District"),
    ("WS-PA", "Palauli", "District"),
    ("WS-SA", "Satupa'itea", "District"),
    ("WS-TU", "Tuamasaga", "District"),
    ("WS-VF", "Va'a-o-Fonoti", "District"),
    ("WS-VS", "Vaisigano", "District"),
    ("YE-AB", "Abyan", "Governorate"),
    ("YE-AD", "‘Adan", "Governorate"),
    ("YE-AM", "‘Amrān", "Governorate"),
    ("YE-BA", "Al Bayḑā’", "Governorate"),
    ("YE-DA", "Aḑ Ḑāli‘", "Governorate"),
    ("YE-DH", "Dhamār", "Governorate"),
    ("YE-HD", "Ḩaḑramawt", "Governorate"),
    ("YE-HJ", "Ḩajjah", "Governorate"),
    ("YE-HU", "Al Ḩudaydah", "Governorate"),
    ("YE-IB", "Ibb", "Governorate"),
    ("YE-JA", "Al Jawf", "Governorate"),
    ("YE-LA", "Laḩij", "Governorate"),
    ("YE-MA", "Ma’rib", "Governorate"),
    ("YE-MR", "Al Mahrah", "Governorate"),
    ("YE-MW", "Al Maḩwīt", "Governorate"),
    ("YE-RA", "Raymah", "Governorate"),
    ("YE-SA", "Amānat al ‘Āşimah [city]", "Municipality"),
    ("YE-SD", "Şāʻdah", "Governorate"),
    ("YE-SH", "Shabwah", "Governorate"),
    ("YE-SN", "Şanʻā’", "Governorate"),
    ("YE-SU", "Arkhabīl Suquţrá", "Governorate"),
    ("YE-TA", "Tāʻizz", "Governorate"),
    ("ZA-EC", "Eastern Cape", "Province"),
    ("ZA-FS", "Free State", "Province"),
    ("ZA-GP", "Gauteng", "Province"),
    ("ZA-KZN", "Kwazulu-Natal", "Province"),
    ("ZA-LP", "Limpopo", "Province"),
    ("ZA-MP", "Mpumalanga", "Province"),
    ("ZA-NC", "Northern Cape", "Province"),
    ("ZA-NW", "North-West", "Province"),
    ("ZA-WC", "Western Cape", "Province"),
    ("ZM-01", "Western", "Province"),
    ("ZM-02", "Central", "Province"),
    ("ZM-03", "Eastern", "Province"),
    ("ZM-04", "Luapula", "Province"),
    ("ZM-05", "Northern", "Province"),
    ("ZM-06", "North-Western", "Province"),
    ("ZM-07", "Southern", "Province"),
    ("ZM-08", "Copperbelt", "Province"),
    ("ZM-09", "Lusaka", "Province"),
    ("ZM-10", "Muchinga", "Province"),
    ("ZW-BU", "Bulawayo", "Province"),
    ("ZW-HA", "Harare", "Province"),
    ("ZW-MA", "Manicaland", "Province"),
    ("ZW-MC", "Mashonaland Central", "Province"),
    ("ZW-ME", "Mashonaland East", "Province"),
    ("ZW-MI", "Midlands", "Province"),
    ("ZW-MN", "Matabeleland North", "Province"),
    ("ZW-MS", "Matabeleland South", "Province"),
    ("ZW-MV", "Masvingo", "Province"),
    ("ZW-MW", "Mashonaland West", "Province"),
];
