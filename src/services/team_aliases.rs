//! Built-in name tables for the team name normalizer.
//!
//! Keys are the verbose franchise names used by the odds feed; values are the
//! short names used in the historical results ledger.

pub const TEAM_ALIASES: &[(&str, &str)] = &[
    ("St. John's Red Storm", "St. John'S"),
    ("CSU Bakersfield Roadrunners", "Cal State Bakersfield"),
    ("Missouri St Bears", "Missouri State"),
    ("St. Mary's Gaels", "Saint Mary'S (Ca)"),
    ("Usc Trojans", "Usc"),
    ("Ole Miss Rebels", "Mississippi"),
    ("Ohio St Buckeyes", "Ohio State"),
    ("North Carolina St Wolfpack", "North Carolina State"),
    ("Lsu Tigers", "Lsu"),
    ("Byu Cougars", "Byu"),
    ("Loyola-Chicago Ramblers", "Loyola Chicago"),
    ("Central Florida Knights", "Central Florida"),
    ("Nc-Greensboro Spartans", "Unc Greensboro"),
    ("Long Beach State Beach", "Long Beach State"),
    ("Boise St Broncos", "Boise State"),
    ("Michigan St Spartans", "Michigan State"),
    ("Washington St Cougars", "Washington State"),
    ("Oregon St Beavers", "Oregon State"),
    ("Kansas St Wildcats", "Kansas State"),
    ("Okla State Cowboys", "Oklahoma State"),
    ("Florida St Seminoles", "Florida State"),
    ("Arizona St Sun Devils", "Arizona State"),
    ("Georgia Tech Yellow Jackets", "Georgia Tech"),
    ("Va Tech Hokies", "Virginia Tech"),
    ("Wvu Mountaineers", "West Virginia"),
    ("Penn State Nittany Lions", "Penn State"),
    ("Miss State Bulldogs", "Mississippi State"),
    ("Kent State Golden Flashes", "Kent State"),
    ("Iowa State Cyclones", "Iowa State"),
    ("East Carolina Pirates", "East Carolina"),
    ("South Carolina Gamecocks", "South Carolina"),
    ("Middle Tennessee Blue Raiders", "Middle Tennessee"),
    ("Florida Gulf Coast Eagles", "Florida Gulf Coast"),
    ("College of Charleston Cougars", "Charleston"),
    ("St Louis Billikens", "Saint Louis"),
    ("Saint Joseph's Hawks", "Saint Joseph'S"),
    ("North Carolina Tar Heels", "North Carolina"),
    ("UTEP Miners", "Utep"),
    ("UNLV Rebels", "Unlv"),
    ("Cal Poly Mustangs", "Cal Poly"),
    ("Abilene Christian Wildcats", "Abilene Christian"),
    ("S. Dakota State Jackrabbits", "South Dakota State"),
    ("Boston U Terriers", "Boston University"),
    ("UMass Lowell River Hawks", "Um-Lowell"),
    ("Central Conn State Blue Devils", "Central Connecticut"),
    ("Nc-Wilmington Seahawks", "Unc Wilmington"),
    ("Stephen F Austin Lumberjacks", "Stephen F Austin"),
    ("S Carolina Upstate Spartans", "Sc Upstate"),
    ("Little Rock Trojans", "Arkansas-Little Rock"),
    ("Eastern Washington Eagles", "Eastern Washington"),
    ("Western Carolina Catamounts", "Western Carolina"),
    ("Northern Kentucky Norse", "Northern Kentucky"),
    ("South Dakota Coyotes", "South Dakota"),
    ("Eastern Illinois Panthers", "Eastern Illinois"),
    ("Southeast Missouri State Redhawks", "Se Missouri State"),
    ("Western Illinois Leathernecks", "Western Illinois"),
    ("Southern Illinois Salukis", "Southern Illinois"),
    ("Cal Baptist Lancers", "California Baptist"),
    ("North Alabama Lions", "North Alabama"),
    ("South Alabama Jaguars", "South Alabama"),
    ("Central Arkansas Bears", "Central Arkansas"),
    ("Southern Utah Thunderbirds", "Southern Utah"),
    ("Utah Tech Trailblazers", "Utah Tech"),
    ("California Baptist Lancers", "California Baptist"),
    ("Louisiana-Monroe Warhawks", "Ul Monroe"),
    ("Louisiana-Lafayette Ragin' Cajuns", "Louisiana"),
    ("Appalachian State Mountaineers", "Appalachian State"),
    ("Georgia State Panthers", "Georgia State"),
    ("Coastal Carolina Chanticleers", "Coastal Carolina"),
    ("UL Monroe Warhawks", "Ul Monroe"),
    ("Arkansas State Red Wolves", "Arkansas State"),
    ("Ga Southern Eagles", "Georgia Southern"),
    ("Texas St Bobcats", "Texas State"),
    ("Ut-Arlington Mavericks", "Ut Arlington"),
    ("Wichita St Shockers", "Wichita State"),
    ("Middle Tenn Blue Raiders", "Middle Tennessee"),
    ("Old Dominion Monarchs", "Old Dominion"),
    ("Uab Blazers", "Uab"),
    ("Western Kentucky Hilltoppers", "Western Kentucky"),
    ("Florida Atlantic Owls", "Florida Atlantic"),
    ("Tx-San Antonio Roadrunners", "Ut San Antonio"),
    ("Louisiana Tech Bulldogs", "Louisiana Tech"),
    ("Bowling Green Falcons", "Bowling Green"),
    ("Eastern Michigan Eagles", "Eastern Michigan"),
    ("Central Michigan Chippewas", "Central Michigan"),
    ("Western Michigan Broncos", "Western Michigan"),
    ("Northern Illinois Huskies", "Northern Illinois"),
    ("Ball State Cardinals", "Ball State"),
    ("Miami-Ohio RedHawks", "Miami (Oh)"),
    ("Kent St Golden Flashes", "Kent State"),
    ("Akron Zips", "Akron"),
    ("Ohio Bobcats", "Ohio"),
    ("Ga. Southern Eagles", "Georgia Southern"),
    ("Louisiana Ragin' Cajuns", "Louisiana"),
    ("Appalachian St Mountaineers", "Appalachian State"),
    ("Arkansas St Red Wolves", "Arkansas State"),
    ("Coastal Caro Chanticleers", "Coastal Carolina"),
    ("Texas-Arlington Mavericks", "Ut Arlington"),
    ("UMKC Kangaroos", "Umkc"),
    ("North Dakota State Bison", "North Dakota State"),
    ("South Dakota State Jackrabbits", "South Dakota State"),
    ("Southeast Missouri St Redhawks", "Se Missouri State"),
    ("Cal St Fullerton Titans", "Cal State Fullerton"),
    ("CSUN Matadors", "Cs Northridge"),
    ("UC Riverside Highlanders", "Uc Riverside"),
    ("UC Davis Aggies", "Uc Davis"),
    ("UC Irvine Anteaters", "Uc Irvine"),
    ("UC Santa Barbara Gauchos", "Uc Santa Barbara"),
    ("Long Beach St Beach", "Long Beach State"),
    ("Hawai'i Rainbow Warriors", "Hawaii"),
    ("St. Thomas (MN) Tommies", "St Thomas"),
    ("UMass-Lowell River Hawks", "Um-Lowell"),
    ("Stonehill Skyhawks", "Stonehill"),
    ("North Florida Ospreys", "North Florida"),
    ("Kennesaw State Owls", "Kennesaw State"),
    ("Jacksonville State Gamecocks", "Jacksonville State"),
    ("Eastern Kentucky Colonels", "Eastern Kentucky"),
    ("Southern Indiana Screaming Eagles", "Southern Indiana"),
    ("UT Martin Skyhawks", "Ut Martin"),
    ("Tennessee Tech Golden Eagles", "Tennessee Tech"),
    ("SIUE Cougars", "Siue"),
    ("Morehead State Eagles", "Morehead State"),
    ("Lindenwood Lions", "Lindenwood"),
    ("Omaha Mavericks", "Omaha"),
    ("Denver Pioneers", "Denver"),
    ("St. Thomas-Minnesota Tommies", "St Thomas"),
    ("Tarleton State Texans", "Tarleton State"),
    ("UT Rio Grande Valley Vaqueros", "Ut Rio Grande Valley"),
    ("Grand Canyon Antelopes", "Grand Canyon"),
    ("Utah Valley Wolverines", "Utah Valley"),
    ("Seattle U Redhawks", "Seattle"),
    ("New Mexico St Aggies", "New Mexico State"),
    ("Stephen F. Austin Lumberjacks", "Stephen F Austin"),
    ("Sam Houston State Bearkats", "Sam Houston State"),
    ("Florida Intl Golden Panthers", "Florida International"),
    ("Charlotte 49ers", "Charlotte"),
    ("Texas-San Antonio Roadrunners", "Ut San Antonio"),
    ("North Texas Mean Green", "North Texas"),
    ("UAB Blazers", "Uab"),
    ("Rice Owls", "Rice"),
    ("Wichita State Shockers", "Wichita State"),
    ("UCF Knights", "Central Florida"),
    ("Memphis Tigers", "Memphis"),
    ("South Florida Bulls", "South Florida"),
    ("Houston Cougars", "Houston"),
    ("Cincinnati Bearcats", "Cincinnati"),
    ("Tulane Green Wave", "Tulane"),
    ("Temple Owls", "Temple"),
    ("SMU Mustangs", "Smu"),
    ("UConn Huskies", "Connecticut"),
    ("BYU Cougars", "Byu"),
    ("Loyola Chicago Ramblers", "Loyola Chicago"),
    ("St. Louis Billikens", "Saint Louis"),
    ("Richmond Spiders", "Richmond"),
    ("St. Bonaventure Bonnies", "Saint Bonaventure"),
    ("George Mason Patriots", "George Mason"),
    ("George Washington Revolutionaries", "George Washington"),
    ("La Salle Explorers", "La Salle"),
    ("VCU Rams", "Vcu"),
    ("UMass Minutemen", "Um_Ass"),
    ("Dayton Flyers", "Dayton"),
    ("Fordham Rams", "Fordham"),
    ("Rhode Island Rams", "Rhode Island"),
    ("St. Joseph's Hawks", "Saint Joseph'S"),
    // NBA
    ("Atlanta Hawks", "Atlanta"),
    ("Boston Celtics", "Boston"),
    ("Brooklyn Nets", "Brooklyn"),
    ("Charlotte Hornets", "Charlotte"),
    ("Chicago Bulls", "Chicago"),
    ("Cleveland Cavaliers", "Cleveland"),
    ("Dallas Mavericks", "Dallas"),
    ("Denver Nuggets", "Denver"),
    ("Detroit Pistons", "Detroit"),
    ("Golden State Warriors", "Golden State"),
    ("Houston Rockets", "Houston"),
    ("Indiana Pacers", "Indiana"),
    ("Los Angeles Clippers", "La Clippers"),
    ("Los Angeles Lakers", "La Lakers"),
    ("Memphis Grizzlies", "Memphis"),
    ("Miami Heat", "Miami"),
    ("Milwaukee Bucks", "Milwaukee"),
    ("Minnesota Timberwolves", "Minnesota"),
    ("New Orleans Pelicans", "New Orleans"),
    ("New York Knicks", "New York"),
    ("Oklahoma City Thunder", "Oklahoma City"),
    ("Orlando Magic", "Orlando"),
    ("Philadelphia 76ers", "Philadelphia"),
    ("Phoenix Suns", "Phoenix"),
    ("Portland Trail Blazers", "Portland"),
    ("Sacramento Kings", "Sacramento"),
    ("San Antonio Spurs", "San Antonio"),
    ("Toronto Raptors", "Toronto"),
    ("Utah Jazz", "Utah"),
    ("Washington Wizards", "Washington"),
    // WNBA
    ("Atlanta Dream", "Atlanta"),
    ("Chicago Sky", "Chicago"),
    ("Connecticut Sun", "Connecticut"),
    ("Dallas Wings", "Dallas"),
    ("Indiana Fever", "Indiana"),
    ("Las Vegas Aces", "Las Vegas"),
    ("Los Angeles Sparks", "Los Angeles"),
    ("Minnesota Lynx", "Minnesota"),
    ("New York Liberty", "New York"),
    ("Phoenix Mercury", "Phoenix"),
    ("Seattle Storm", "Seattle"),
    ("Washington Mystics", "Washington"),
];

/// Mascot and location suffixes stripped from names missing from the alias table.
pub const TEAM_SUFFIXES: &[&str] = &[
    " state", " tech", " a&m", " am", " red storm", " roadrunners", " bears", " gaels",
    " trojans", " rebels", " buckeyes", " wolfpack", " tigers", " cougars", " ramblers",
    " knights", " spartans", " beavers", " wildcats", " cowboys", " seminoles",
    " sun devils", " yellow jackets", " hokies", " mountaineers", " nittany lions",
    " bulldogs", " golden flashes", " cyclones", " pirates", " gamecocks",
    " blue raiders", " eagles", " seahawks", " lumberjacks", " salukis", " leathernecks",
    " redhawks", " broncos", " chippewas", " panthers", " river hawks", " thunderbirds",
    " vaqueros", " anteaters", " gauchos", " matadors", " banana slugs",
    " fighting hawaiians", " shockers", " monarchs", " blazers", " hilltoppers", " owls",
    " mean green", " cardinals", " huskie", " bobcats", " zips", " aggies", " bearkats",
    " 49ers", " green wave", " grizzlies", " heat", " bucks", " timberwolves",
    " pelicans", " knicks", " thunder", " magic", " 76ers", " suns", " trail blazers",
    " kings", " spurs", " raptors", " jazz", " wizards", " dream", " sky", " sun",
    " wings", " fever", " aces", " sparks", " lynx", " liberty", " mercury", " storm",
    " mystics", " lakers", " clippers", " nets", " celtics", " hornets", " bulls",
    " cavaliers", " mavericks", " pistons", " warriors", " rockets", " pacers",
];
