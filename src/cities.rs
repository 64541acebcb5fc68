/// Names records are drawn from. The PRNG picks an index into this table, so
/// reordering it changes every generated file.
pub static CITIES: [&str; 100] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "San Francisco",
    "Charlotte",
    "Indianapolis",
    "Seattle",
    "Denver",
    "Washington",
    "Boston",
    "El Paso",
    "Nashville",
    "Detroit",
    "Oklahoma City",
    "Portland",
    "Las Vegas",
    "Memphis",
    "Louisville",
    "Baltimore",
    "Milwaukee",
    "Albuquerque",
    "Tucson",
    "Fresno",
    "Sacramento",
    "Kansas City",
    "Long Beach",
    "Mesa",
    "Atlanta",
    "Colorado Springs",
    "Virginia Beach",
    "Raleigh",
    "Omaha",
    "Miami",
    "Oakland",
    "Minneapolis",
    "Tulsa",
    "Wichita",
    "New Orleans",
    "Arlington",
    "Cleveland",
    "Bakersfield",
    "Tampa",
    "Aurora",
    "Honolulu",
    "Anaheim",
    "Santa Ana",
    "Corpus Christi",
    "Riverside",
    "Lexington",
    "St. Louis",
    "Stockton",
    "Pittsburgh",
    "Saint Paul",
    "Cincinnati",
    "Anchorage",
    "Henderson",
    "Greensboro",
    "Plano",
    "Newark",
    "Toledo",
    "Lincoln",
    "Orlando",
    "Chula Vista",
    "Jersey City",
    "Chandler",
    "Fort Wayne",
    "Buffalo",
    "Durham",
    "St. Petersburg",
    "Irvine",
    "Laredo",
    "Madison",
    "Norfolk",
    "Lubbock",
    "Gilbert",
    "Winston-Salem",
    "Glendale",
    "Hialeah",
    "Garland",
    "Scottsdale",
    "Irving",
    "Chesapeake",
    "North Las Vegas",
    "Fremont",
    "Baton Rouge",
    "Richmond",
    "Boise",
    "San Bernardino",
    "Birmingham",
];
