//! IBAN validation and country/bank enrichment.
//!
//! Validation checks the structure, the country-specific total length, and
//! the ISO 7064 mod-97 checksum. An IBAN without a country prefix is treated
//! as Polish, and Polish IBANs must additionally carry a known 3-digit bank
//! sort code. Enrichment lookups work on merely well-formed input so that
//! display layers can label a number while the user is still typing it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::strip_whitespace;

/// Country metadata carried by the leading two letters of an IBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanCountryData {
    /// Country name (Polish-language, as published by the source dataset).
    pub country: &'static str,
    /// Total IBAN length for that country, prefix included.
    pub length: usize,
}

/// Country code → (name, expected length). Sorted for binary search.
static IBAN_COUNTRY_DATA: &[(&str, IbanCountryData)] = &[
    ("AD", IbanCountryData { country: "Andora", length: 24 }),
    ("AE", IbanCountryData { country: "Zjednoczone Emiraty Arabskie", length: 23 }),
    ("AL", IbanCountryData { country: "Albania", length: 28 }),
    ("AT", IbanCountryData { country: "Austria", length: 20 }),
    ("AZ", IbanCountryData { country: "Azerbejdżan", length: 28 }),
    ("BA", IbanCountryData { country: "Bośnia i Hercegowina", length: 20 }),
    ("BE", IbanCountryData { country: "Belgia", length: 16 }),
    ("BG", IbanCountryData { country: "Bułgaria", length: 22 }),
    ("BH", IbanCountryData { country: "Bahrajn", length: 22 }),
    ("BI", IbanCountryData { country: "Burundi", length: 27 }),
    ("BR", IbanCountryData { country: "Brazylia", length: 29 }),
    ("BY", IbanCountryData { country: "Białoruś", length: 28 }),
    ("CH", IbanCountryData { country: "Szwajcaria", length: 21 }),
    ("CR", IbanCountryData { country: "Kostaryka", length: 22 }),
    ("CY", IbanCountryData { country: "Cypr", length: 28 }),
    ("CZ", IbanCountryData { country: "Czechy", length: 24 }),
    ("DE", IbanCountryData { country: "Niemcy", length: 22 }),
    ("DJ", IbanCountryData { country: "Dżibuti", length: 27 }),
    ("DK", IbanCountryData { country: "Dania", length: 18 }),
    ("DO", IbanCountryData { country: "Dominikana", length: 28 }),
    ("EE", IbanCountryData { country: "Estonia", length: 20 }),
    ("EG", IbanCountryData { country: "Egipt", length: 29 }),
    ("ES", IbanCountryData { country: "Hiszpania", length: 24 }),
    ("FI", IbanCountryData { country: "Finlandia", length: 18 }),
    ("FK", IbanCountryData { country: "Falklandy", length: 18 }),
    ("FO", IbanCountryData { country: "Wyspy Owcze", length: 18 }),
    ("FR", IbanCountryData { country: "Francja", length: 27 }),
    ("GB", IbanCountryData { country: "Wielka Brytania", length: 22 }),
    ("GE", IbanCountryData { country: "Gruzja", length: 22 }),
    ("GI", IbanCountryData { country: "Gibraltar", length: 23 }),
    ("GL", IbanCountryData { country: "Grenlandia", length: 18 }),
    ("GR", IbanCountryData { country: "Grecja", length: 27 }),
    ("GT", IbanCountryData { country: "Gwatemala", length: 28 }),
    ("HR", IbanCountryData { country: "Chorwacja", length: 21 }),
    ("HU", IbanCountryData { country: "Węgry", length: 28 }),
    ("IE", IbanCountryData { country: "Irlandia", length: 22 }),
    ("IL", IbanCountryData { country: "Izrael", length: 23 }),
    ("IQ", IbanCountryData { country: "Irak", length: 23 }),
    ("IS", IbanCountryData { country: "Islandia", length: 26 }),
    ("IT", IbanCountryData { country: "Włochy", length: 27 }),
    ("JO", IbanCountryData { country: "Jordania", length: 30 }),
    ("KW", IbanCountryData { country: "Kuwejt", length: 30 }),
    ("KZ", IbanCountryData { country: "Kazachstan", length: 20 }),
    ("LB", IbanCountryData { country: "Liban", length: 28 }),
    ("LC", IbanCountryData { country: "Saint Lucia", length: 32 }),
    ("LI", IbanCountryData { country: "Liechtenstein", length: 21 }),
    ("LT", IbanCountryData { country: "Litwa", length: 20 }),
    ("LU", IbanCountryData { country: "Luksemburg", length: 20 }),
    ("LV", IbanCountryData { country: "Łotwa", length: 21 }),
    ("LY", IbanCountryData { country: "Libia", length: 25 }),
    ("MC", IbanCountryData { country: "Monako", length: 27 }),
    ("MD", IbanCountryData { country: "Mołdawia", length: 24 }),
    ("ME", IbanCountryData { country: "Czarnogóra", length: 22 }),
    ("MK", IbanCountryData { country: "Macedonia Północna", length: 19 }),
    ("MN", IbanCountryData { country: "Mongolia", length: 20 }),
    ("MR", IbanCountryData { country: "Mauretania", length: 27 }),
    ("MT", IbanCountryData { country: "Malta", length: 31 }),
    ("MU", IbanCountryData { country: "Mauritius", length: 30 }),
    ("NI", IbanCountryData { country: "Nikaragua", length: 28 }),
    ("NL", IbanCountryData { country: "Holandia", length: 18 }),
    ("NO", IbanCountryData { country: "Norwegia", length: 15 }),
    ("OM", IbanCountryData { country: "Oman", length: 23 }),
    ("PK", IbanCountryData { country: "Pakistan", length: 24 }),
    ("PL", IbanCountryData { country: "Polska", length: 28 }),
    ("PS", IbanCountryData { country: "Palestyna", length: 29 }),
    ("PT", IbanCountryData { country: "Portugalia", length: 25 }),
    ("QA", IbanCountryData { country: "Katar", length: 29 }),
    ("RO", IbanCountryData { country: "Rumunia", length: 24 }),
    ("RS", IbanCountryData { country: "Serbia", length: 22 }),
    ("RU", IbanCountryData { country: "Rosja", length: 33 }),
    ("SA", IbanCountryData { country: "Arabia Saudyjska", length: 24 }),
    ("SC", IbanCountryData { country: "Seszele", length: 31 }),
    ("SD", IbanCountryData { country: "Sudan", length: 18 }),
    ("SE", IbanCountryData { country: "Szwecja", length: 24 }),
    ("SI", IbanCountryData { country: "Słowenia", length: 19 }),
    ("SK", IbanCountryData { country: "Słowacja", length: 24 }),
    ("SM", IbanCountryData { country: "San Marino", length: 27 }),
    ("SO", IbanCountryData { country: "Somalia", length: 23 }),
    ("ST", IbanCountryData { country: "Wyspy Świętego Tomasza i Książęca", length: 25 }),
    ("SV", IbanCountryData { country: "Salwador", length: 28 }),
    ("TL", IbanCountryData { country: "Timor Wschodni", length: 23 }),
    ("TN", IbanCountryData { country: "Tunezja", length: 24 }),
    ("TR", IbanCountryData { country: "Turcja", length: 26 }),
    ("UA", IbanCountryData { country: "Ukraina", length: 29 }),
    ("VA", IbanCountryData { country: "Watykan", length: 22 }),
    ("VG", IbanCountryData { country: "Brytyjskie Wyspy Dziewicze", length: 24 }),
    ("XK", IbanCountryData { country: "Kosowo", length: 20 }),
    ("YE", IbanCountryData { country: "Jemen", length: 30 }),
];

/// Polish bank sort code → customary short bank name. Sorted for binary
/// search. Membership here is part of Polish IBAN validity.
static BANK_NAMES: &[(&str, &str)] = &[
    ("101", "Narodowy Bank Polski"),
    ("102", "PKO BP"),
    ("103", "Bank Handlowy (Citi Handlowy)"),
    ("105", "ING Bank Śląski"),
    ("109", "Santander Bank Polska"),
    ("113", "BGK"),
    ("114", "mBank"),
    ("116", "Bank Millennium"),
    ("124", "Pekao SA"),
    ("132", "Bank Pocztowy"),
    ("137", "DNB Bank Polska Spółka Akcyjna"),
    ("154", "BOŚ Bank"),
    ("156", "Velo Bank"),
    ("158", "Mercedes-Benz Bank Polska"),
    ("161", "SGB - Bank"),
    ("167", "RBS Bank (Polska)"),
    ("168", "Plus Bank"),
    ("184", "Societe Generale"),
    ("187", "Nest Bank"),
    ("193", "Bank Polskiej Spółdzielczości"),
    ("194", "Credit Agricole Bank Polska"),
    ("203", "BNP Paribas"),
    ("212", "Santander Consumer Bank"),
    ("216", "Toyota Bank"),
    ("219", "DNB Bank Polska"),
    ("248", "Getin Noble Bank"),
    ("249", "Alior Bank"),
    ("271", "FCE Bank Polska"),
    ("272", "Inbank"),
    ("277", "Volkswagen Bank"),
    ("280", "HSBC"),
    ("291", "Aion Bank"),
    ("812", "Bank Spółdzielczy w Porąbce"),
    ("845", "Orzesko-Knurowski Bank Spółdzielczy"),
    ("914", "Bank Spółdzielczy w Przysusze"),
];

/// Polish bank sort code → full registered name, including branch-level
/// codes of cooperative banks. Display data only; not consulted during
/// validation.
static BANK_FULL_NAMES: &[(&str, &str)] = &[
    ("000", "Alior Bank Spółka Akcyjna"),
    ("101", "Narodowy Bank Polski"),
    ("102", "Powszechna Kasa Oszczędności Bank Polski Spółka Akcyjna"),
    ("103", "Bank Handlowy w Warszawie Spółka Akcyjna"),
    ("104", "Bank Millennium Spółka Akcyjna"),
    ("105", "ING Bank Śląski Spółka Akcyjna"),
    ("106", "Bank BPH Spółka Akcyjna"),
    ("109", "Santander Bank Polska Spółka Akcyjna"),
    ("113", "Bank Gospodarstwa Krajowego"),
    ("114", "mBank Spółka Akcyjna"),
    ("116", "Bank Millennium Spółka Akcyjna"),
    ("122", "Bank Handlowo-Kredytowy Spółka Akcyjna w Katowicach w likwidacji"),
    ("124", "Bank Polska Kasa Opieki Spółka Akcyjna"),
    ("128", "HSBC Continental Europe (Spółka Akcyjna) Oddział w Polsce"),
    ("132", "Bank Pocztowy Spółka Akcyjna"),
    ("137", "DNB Bank Polska Spółka Akcyjna"),
    ("139", "Santander Bank Polska Spółka Akcyjna"),
    ("144", "Powszechna Kasa Oszczędności Bank Polski Spółka Akcyjna"),
    ("146", "VeloBank Spółka Akcyjna"),
    ("147", "Bank Millennium Spółka Akcyjna"),
    ("150", "Santander Bank Polska Spółka Akcyjna"),
    ("151", "mBank Spółka Akcyjna"),
    ("152", "VeloBank Spółka Akcyjna"),
    ("154", "Bank Ochrony Środowiska Spółka Akcyjna"),
    ("156", "VeloBank Spółka Akcyjna"),
    ("157", "HSBC Continental Europe (Spółka Akcyjna) Oddział w Polsce"),
    ("160", "BNP Paribas Bank Polska Spółka Akcyjna"),
    ("161", "SGB-Bank Spółka Akcyjna"),
    ("163", "mBank Spółka Akcyjna"),
    ("168", "PLUS BANK Spółka Akcyjna"),
    ("171", "Bank BPH Spółka Akcyjna"),
    ("175", "BNP Paribas Bank Polska Spółka Akcyjna"),
    ("179", "Credit Agricole Bank Polska Spółka Akcyjna"),
    ("180", "ING Bank Śląski Spółka Akcyjna"),
    ("182", "Bank Handlowy w Warszawie Spółka Akcyjna"),
    ("183", "Danske Bank A/S Spółka Akcyjna Oddział w Polsce"),
    ("184", "Société Générale Spółka Akcyjna Oddział w Polsce"),
    ("186", "BNP Paribas S.A. Oddział w Polsce"),
    ("187", "Nest Bank Spółka Akcyjna"),
    ("188", "Deutsche Bank Polska Spółka Akcyjna"),
    ("189", "Pekao Bank Hipoteczny Spółka Akcyjna"),
    ("190", "Bank BPH Spółka Akcyjna"),
    ("191", "Santander Bank Polska Spółka Akcyjna"),
    ("193", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("194", "Credit Agricole Bank Polska Spółka Akcyjna"),
    ("195", "Bank Polska Kasa Opieki Spółka Akcyjna"),
    ("196", "Santander Consumer Bank Spółka Akcyjna"),
    ("197", "ING Bank Śląski Spółka Akcyjna"),
    ("200", "BNP Paribas Bank Polska Spółka Akcyjna"),
    ("201", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("202", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("204", "SGB-Bank Spółka Akcyjna"),
    ("205", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("206", "SGB-Bank Spółka Akcyjna"),
    ("208", "SGB-Bank Spółka Akcyjna"),
    ("210", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("211", "BANK POLSKIEJ SPÓŁDZIELCZOŚCI SPÓŁKA AKCYJNA"),
    ("212", "Santander Consumer Bank Spółka Akcyjna"),
    ("213", "Volkswagen Bank GmbH Spółka z ograniczoną odpowiedzialnością Oddział w Polsce"),
    ("214", "CA Auto Bank S.p.A. Spółka Akcyjna Oddział w Polsce"),
    ("215", "mBank Hipoteczny Spółka Akcyjna"),
    ("216", "Toyota Bank Polska Spółka Akcyjna"),
    ("218", "ING Bank Śląski Spółka Akcyjna"),
    ("219", "DNB Bank Polska Spółka Akcyjna"),
    ("220", "Svenska Handelsbanken AB Spółka Akcyjna Oddział w Polsce"),
    ("225", "Svenska Handelsbanken AB Spółka Akcyjna Oddział w Polsce"),
    ("226", "RCI Banque Spółka Akcyjna Oddział w Polsce"),
    ("229", "VeloBank Spółka Akcyjna"),
    ("233", "Credit Agricole Bank Polska Spółka Akcyjna"),
    ("234", "Raiffeisen Bank International AG (Spółka Akcyjna) Oddział w Polsce"),
    ("235", "BNP Paribas S.A. Oddział w Polsce"),
    ("236", "Danske Bank A/S Spółka Akcyjna Oddział w Polsce"),
    ("237", "Skandinaviska Enskilda Banken AB (Spółka Akcyjna) - Oddział w Polsce"),
    ("239", "CAIXABANK, S.A. (SPÓŁKA AKCYJNA) ODDZIAŁ W POLSCE"),
    ("241", "U.S. Bank Europe Designated Activity Company (Spółka z o.o. o Wyznaczonym Przedmiocie Działalności) Oddział w Polsce"),
    ("243", "BNP Paribas S.A. Oddział w Polsce"),
    ("247", "HAITONG BANK, S.A. Spółka Akcyjna Oddział w Polsce"),
    ("248", "VeloBank Spółka Akcyjna"),
    ("249", "Alior Bank Spółka Akcyjna"),
    ("251", "Aareal Bank Aktiengesellschaft (Spółka Akcyjna) - Oddział w Polsce"),
    ("253", "Nest Bank Spółka Akcyjna"),
    ("254", "Citibank Europe plc (Publiczna Spółka Akcyjna) Oddział w Polsce"),
    ("255", "Ikano Bank AB (publ) Spółka Akcyjna Oddział w Polsce"),
    ("256", "Nordea Bank Abp Spółka Akcyjna Oddział w Polsce"),
    ("258", "J.P. Morgan SE (Spółka Europejska) Oddział w Polsce"),
    ("260", "Bank of China (Europe) S.A. Spółka Akcyjna Oddział w Polsce"),
    ("262", "Industrial and Commercial Bank of China (Europe) S.A. (Spółka Akcyjna) Oddział w Polsce"),
    ("264", "RCI Banque Spółka Akcyjna Oddział w Polsce"),
    ("265", "EUROCLEAR Bank SA/NV (Spółka Akcyjna) - Oddział w Polsce"),
    ("266", "Intesa Sanpaolo S.p.A. Spółka Akcyjna Oddział w Polsce"),
    ("267", "Western Union International Bank GmbH, Sp. z o.o. Oddział w Polsce"),
    ("269", "PKO Bank Hipoteczny Spółka Akcyjna"),
    ("270", "TF BANK AB (Spółka Akcyjna) Oddział w Polsce"),
    ("272", "AS Inbank Spółka Akcyjna - Oddział w Polsce"),
    ("273", "China Construction Bank (Europe) S.A. (Spółka Akcyjna) Oddział w Polsce"),
    ("275", "John Deere Bank S.A. Spółka Akcyjna Oddział w Polsce"),
    ("277", "Volkswagen Bank GmbH Spółka z ograniczoną odpowiedzialnością Oddział w Polsce"),
    ("278", "ING Bank Hipoteczny Spółka Akcyjna"),
    ("279", "Raiffeisen Bank International AG (Spółka Akcyjna) Oddział w Polsce"),
    ("280", "HSBC Continental Europe (Spółka Akcyjna) Oddział w Polsce"),
    ("281", "Goldman Sachs Bank Europe SE Spółka Europejska Oddział w Polsce"),
    ("283", "J.P. Morgan SE (Spółka Europejska) Oddział w Polsce"),
    ("285", "BFF Bank S.p.A. Spółka Akcyjna Oddział w Polsce"),
    ("286", "CA Auto Bank S.p.A. Spółka Akcyjna Oddział w Polsce"),
    ("287", "Bank Nowy Spółka Akcyjna"),
    ("288", "Allfunds Bank S.A.U. (Spółka Akcyjna) Oddział w Polsce"),
    ("289", "Hoist Finance AB (publ) Spółka Akcyjna Oddział w Polsce"),
    ("290", "Millennium Bank Hipoteczny Spółka Akcyjna"),
    ("291", "AION Bank S.A. Spółka Akcyjna Oddział w Polsce"),
    ("293", "VeloBank Spółka Akcyjna"),
    ("294", "Morgan Stanley Europe SE (Spółka Europejska) Oddział w Polsce"),
    ("296", "Woori Bank Europe GmbH spółka z ograniczoną odpowiedzialnością Oddział w Polsce"),
    ("800", "Bank Spółdzielczy w Otwocku"),
    ("801", "Bank Spółdzielczy w Halinowie"),
    ("802", "Bank Spółdzielczy w Karczewie"),
    ("803", "Bank Spółdzielczy w Trzebieszowie"),
    ("804", "Bank Spółdzielczy w Łomazach"),
    ("805", "Bank Spółdzielczy w Białej Podlaskiej"),
    ("806", "Bank Spółdzielczy w Białymstoku"),
    ("808", "Bank Spółdzielczy w Hajnówce"),
    ("809", "Bank Spółdzielczy w Sokółce"),
    ("811", "Bank Spółdzielczy w Kalwarii Zebrzydowskiej"),
    ("813", "ABS Bank Spółdzielczy"),
    ("815", "Bank Spółdzielczy w Piotrkowie Kujawskim"),
    ("817", "Bank Spółdzielczy w Nakle n/Notecią"),
    ("818", "Wschodni Bank Spółdzielczy w Chełmie"),
    ("819", "Bank Spółdzielczy w Leśniowicach"),
    ("820", "Bank Spółdzielczy w Leśniowicach"),
    ("821", "Bank Spółdzielczy w Pułtusku"),
    ("822", "Bank Spółdzielczy w Glinojecku"),
    ("823", "Bank Spółdzielczy w Płońsku"),
    ("824", "Bank Spółdzielczy w Pułtusku"),
    ("825", "Bank Spółdzielczy w Krzepicach"),
    ("826", "Częstochowski Bank Spółdzielczy JURA BANK"),
    ("827", "Bank Spółdzielczy w Konopiskach"),
    ("828", "Międzypowiatowy Bank Spółdzielczy w Myszkowie"),
    ("829", "Międzypowiatowy Bank Spółdzielczy w Myszkowie"),
    ("830", "Bank Spółdzielczy w Malborku"),
    ("831", "Braniewsko - Pasłęcki Bank Spółdzielczy z siedzibą w Pasłęku"),
    ("832", "Bank Spółdzielczy w Sierakowicach"),
    ("833", "Bank Spółdzielczy w Starogardzie Gdańskim"),
    ("834", "Bank Spółdzielczy w Skórczu"),
    ("835", "Gospodarczy Bank Spółdzielczy w Barlinku"),
    ("837", "Bank Spółdzielczy w Rzepinie"),
    ("838", "Bank Spółdzielczy Lwówek Śląski w Lwówku Śląskim"),
    ("840", "Bank Spółdzielczy w Pleszewie"),
    ("841", "Rejonowy Bank Spółdzielczy w Lututowie"),
    ("843", "Bank Spółdzielczy w Będzinie"),
    ("844", "Bank Spółdzielczy w Pszczynie"),
    ("845", "Bank Spółdzielczy Czechowice-Dziedzice-Bestwina"),
    ("846", "Mikołowski Bank Spółdzielczy w Mikołowie"),
    ("849", "Bank Spółdzielczy w Łopusznie"),
    ("851", "Bank Spółdzielczy w Kielcach"),
    ("853", "Bank Spółdzielczy w Witkowie"),
    ("854", "Bank Spółdzielczy w Kłodawie"),
    ("855", "Bank Spółdzielczy w Witkowie"),
    ("856", "Ludowy Bank Spółdzielczy w Strzałkowie"),
    ("857", "Bank Spółdzielczy w Sławnie"),
    ("858", "Bank Spółdzielczy w Kaliszu Pomorskim"),
    ("859", "Krakowski Bank Spółdzielczy"),
    ("862", "Bank Spółdzielczy w Lipinkach"),
    ("865", "Bank Spółdzielczy we Wschowie"),
    ("866", "Bank Spółdzielczy we Wschowie"),
    ("868", "Rejonowy Bank Spółdzielczy w Bychawie"),
    ("869", "Rejonowy Bank Spółdzielczy w Bychawie"),
    ("870", "Bank Spółdzielczy w Niemcach"),
    ("871", "Bank Spółdzielczy w Lubartowie"),
    ("872", "Bank Spółdzielczy w Radzyniu Podlaskim"),
    ("873", "Powiatowy Bank Spółdzielczy w Opolu Lubelskim"),
    ("874", "Powiatowy Bank Spółdzielczy w Opolu Lubelskim"),
    ("875", "Bank Spółdzielczy w Kolnie"),
    ("877", "Bank Spółdzielczy w Mońkach"),
    ("878", "Bank Spółdzielczy Ziemi Kaliskiej"),
    ("879", "Bank Spółdzielczy w Limanowej"),
    ("880", "Łącki Bank Spółdzielczy"),
    ("882", "Bank Spółdzielczy w Bartoszycach"),
    ("883", "Bank Spółdzielczy w Nidzicy"),
    ("884", "Bank Spółdzielczy w Szczytnie"),
    ("885", "Bank Spółdzielczy w Bartoszycach"),
    ("886", "Bank Spółdzielczy w Namysłowie"),
    ("887", "Bank Spółdzielczy w Zawadzkiem"),
    ("888", "Bank Spółdzielczy w Gogolinie"),
    ("890", "Bank Spółdzielczy w Zawadzkiem"),
    ("891", "Kurpiowski Bank Spółdzielczy w Myszyńcu"),
    ("892", "Bank Spółdzielczy w Krasnosielcu z siedzibą w Makowie Mazowieckim"),
    ("893", "Bank Spółdzielczy w Pułtusku"),
    ("894", "Spółdzielczy Bank Ludowy w Złotowie"),
    ("895", "Lubusko-Wielkopolski Bank Spółdzielczy"),
    ("896", "naturoBank Bank Spółdzielczy"),
    ("898", "Powiatowy Bank Spółdzielczy w Tomaszowie Mazowieckim"),
    ("899", "Powiatowy Bank Spółdzielczy w Tomaszowie Mazowieckim"),
    ("900", "Bank Spółdzielczy \"MAZOWSZE\" w Płocku"),
    ("901", "Bank Spółdzielczy \"MAZOWSZE\" w Płocku"),
    ("903", "Rejonowy Bank Spółdzielczy w Lututowie"),
    ("904", "Bank Spółdzielczy \"Wspólna Praca\" w Kutnie"),
    ("905", "Powiatowy Bank Spółdzielczy we Wrześni"),
    ("906", "Bank Spółdzielczy w Gnieźnie"),
    ("907", "Bank Spółdzielczy Pojezierza Międzychodzko - Sierakowskiego w Sierakowie"),
    ("908", "Bank Spółdzielczy Duszniki"),
    ("911", "Bank Spółdzielczy Rzemiosła w Radomiu"),
    ("912", "Bank Spółdzielczy w Zwoleniu"),
    ("913", "Bank Spółdzielczy w Przysusze"),
    ("914", "Bank Spółdzielczy Rzemiosła w Radomiu"),
    ("915", "Bank Spółdzielczy Rzemiosła w Radomiu"),
    ("916", "Bank Spółdzielczy w Strzyżowie"),
    ("917", "Bank Spółdzielczy w Sędziszowie Młp."),
    ("918", "Bank Spółdzielczy w Przecławiu"),
    ("919", "Bank Spółdzielczy w Siedlcach"),
    ("920", "Bank Spółdzielczy w Krzywdzie"),
    ("921", "Bank Spółdzielczy w Rykach"),
    ("922", "Bank Spółdzielczy w Mińsku Mazowieckim"),
    ("923", "Powiatowy Bank Spółdzielczy w Sokołowie Podlaskim"),
    ("924", "Bank Spółdzielczy w Warcie"),
    ("925", "Nadwarciański Bank Spółdzielczy w Działoszynie"),
    ("926", "Rejonowy Bank Spółdzielczy w Lututowie"),
    ("928", "Rejonowy Bank Spółdzielczy w Lututowie"),
    ("929", "Bank Spółdzielczy w Skierniewicach"),
    ("931", "Bank Spółdzielczy w Ustce"),
    ("932", "Bank Spółdzielczy w Bytowie"),
    ("933", "Bank Spółdzielczy w Ustce"),
    ("934", "Mazurski Bank Spółdzielczy w Giżycku"),
    ("935", "Bank Spółdzielczy w Sejnach"),
    ("936", "Bank Spółdzielczy w Sejnach"),
    ("937", "Bank Spółdzielczy Ziemi Szczecińskiej"),
    ("938", "Bank Spółdzielczy w Chojnie"),
    ("939", "Bank Spółdzielczy w Tarnobrzegu"),
    ("940", "Nadsański Bank Spółdzielczy"),
    ("941", "Nadwiślański Bank Spółdzielczy w Solcu-Zdroju"),
    ("942", "Bank Spółdzielczy w Sandomierzu"),
    ("943", "Bank Spółdzielczy w Tarnobrzegu"),
    ("944", "Bank Spółdzielczy Rzemiosła w Krakowie"),
    ("946", "Bank Spółdzielczy Rzemiosła w Krakowie"),
    ("947", "Bank Spółdzielczy w Pilźnie"),
    ("948", "Bank Spółdzielczy w Brodnicy"),
    ("949", "Bank Spółdzielczy w Brodnicy"),
    ("950", "Bank Spółdzielczy w Łasinie"),
    ("951", "Bank Spółdzielczy w Ząbkowicach Śląskich"),
    ("952", "Bank Spółdzielczy w Ząbkowicach Śląskich"),
    ("953", "Bank Spółdzielczy w Jaworze"),
    ("954", "Kujawsko-Dobrzyński Bank Spółdzielczy"),
    ("957", "Bank Spółdzielczy w Oławie"),
    ("959", "Bank Spółdzielczy w Żmigrodzie"),
    ("960", "Bank Spółdzielczy w Tomaszowie Lubelskim"),
    ("961", "Bank Spółdzielczy w Izbicy"),
    ("962", "Bank Spółdzielczy w Tomaszowie Lubelskim"),
    ("963", "Bank Spółdzielczy w Tomaszowie Lubelskim"),
    ("964", "Powiatowy Bank Spółdzielczy w Zamościu"),
    ("965", "Bank Spółdzielczy w Środzie Śląskiej"),
    ("966", "Bank Spółdzielczy w Siedlcu"),
    ("967", "Bank Spółdzielczy w Żaganiu"),
];

struct IbanParts<'a> {
    country_code: &'a str,
    control_sum: &'a str,
    bank_code: &'a str,
    rest: &'a str,
}

/// Split a normalized (whitespace-free, uppercase) IBAN into its fields:
/// optional 2-letter country code, 2-digit control sum, 3-digit bank sort
/// code, and an 8–25 digit account rest. A missing country code means `PL`.
fn split_iban(iban: &str) -> Option<IbanParts<'_>> {
    let bytes = iban.as_bytes();
    let (country_code, digits) = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() {
        if !bytes[1].is_ascii_alphabetic() {
            return None;
        }
        (&iban[..2], &iban[2..])
    } else {
        ("PL", iban)
    };

    // control sum + bank code + 8..=25 digit rest
    if !(13..=30).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(IbanParts {
        country_code,
        control_sum: &digits[..2],
        bank_code: &digits[2..5],
        rest: &digits[5..],
    })
}

/// Remainder of a decimal digit string modulo `modulus`, reduced digit by
/// digit so the full number is never materialized.
fn modulo(digits: &str, modulus: u32) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| (acc * 10 + u32::from(b - b'0')) % modulus)
}

fn country_data(code: &str) -> Option<&'static IbanCountryData> {
    IBAN_COUNTRY_DATA
        .binary_search_by_key(&code, |entry| entry.0)
        .ok()
        .map(|i| &IBAN_COUNTRY_DATA[i].1)
}

fn bank_lookup(
    table: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<&'static str> {
    table
        .binary_search_by_key(&code, |entry| entry.0)
        .ok()
        .map(|i| table[i].1)
}

/// Validate an IBAN.
///
/// Whitespace is ignored and letters are case-insensitive; any other
/// separator makes the IBAN invalid. The country code must be known, the
/// total length must match that country, a Polish IBAN must name a known
/// bank, and the mod-97 checksum over the rearranged number must equal 1.
pub fn is_iban_valid(iban: &str) -> bool {
    let iban = strip_whitespace(iban).to_uppercase();
    let Some(parts) = split_iban(&iban) else {
        return false;
    };

    let Some(data) = country_data(parts.country_code) else {
        return false;
    };
    let digit_count = parts.control_sum.len() + parts.bank_code.len() + parts.rest.len();
    if digit_count + 2 != data.length {
        return false;
    }

    if parts.country_code == "PL" && bank_lookup(BANK_NAMES, parts.bank_code).is_none() {
        return false;
    }

    // Move the 4-character prefix to the end, spelling the country letters
    // as two-digit numbers (A=10 … Z=35).
    let country_bytes = parts.country_code.as_bytes();
    let rearranged = format!(
        "{}{}{}{}{}",
        parts.bank_code,
        parts.rest,
        u32::from(country_bytes[0]) - 55,
        u32::from(country_bytes[1]) - 55,
        parts.control_sum,
    );

    modulo(&rearranged, 97) == 1
}

/// Logical negation of [`is_iban_valid`].
pub fn is_iban_invalid(iban: &str) -> bool {
    !is_iban_valid(iban)
}

/// Country name and expected length for the leading two letters of an IBAN.
///
/// Only looks at the country code; the rest of the input does not have to
/// be a valid IBAN. Returns `None` for an unknown or missing code.
pub fn country_data_for_iban(iban: &str) -> Option<IbanCountryData> {
    let iban = strip_whitespace(iban).to_uppercase();
    let code = iban.get(..2)?;
    country_data(code).copied()
}

/// Short bank name for the 3-digit sort code of a Polish IBAN.
///
/// Returns `None` for non-Polish IBANs and unknown sort codes.
pub fn bank_name_for_iban(iban: &str) -> Option<&'static str> {
    bank_lookup(BANK_NAMES, &polish_bank_code(iban)?)
}

/// Full registered bank name for the 3-digit sort code of a Polish IBAN.
///
/// Covers branch-level codes of cooperative banks that the short-name table
/// does not. Returns `None` for non-Polish IBANs and unknown sort codes.
pub fn bank_full_name_for_iban(iban: &str) -> Option<&'static str> {
    bank_lookup(BANK_FULL_NAMES, &polish_bank_code(iban)?)
}

/// The 3-digit bank sort code of a `PL`-prefixed IBAN, if the input is at
/// least shaped like one (`PL`, 2 digits, 3 digits, …).
fn polish_bank_code(iban: &str) -> Option<String> {
    let iban = strip_whitespace(iban).to_uppercase();
    if !iban.starts_with("PL") {
        return None;
    }
    let code = iban.get(2..7)?;
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(code[2..].to_string())
}

/// Account-acceptance policy layered on top of IBAN validation.
///
/// Lets a caller restrict otherwise-valid IBANs to specific countries or
/// Polish banks, e.g. a payout form that only accepts domestic accounts.
/// The policy never loosens validation; it only adds constraints after
/// [`is_iban_valid`] has passed.
#[derive(Debug, Clone, Default)]
pub struct IbanPolicy {
    /// Short bank names (as in [`bank_name_for_iban`]) that are acceptable.
    /// `None` means any bank.
    pub allowed_bank_names: Option<Vec<String>>,
    /// Country codes that are acceptable. `None` means any country. An IBAN
    /// without an explicit code counts as `PL`.
    pub allowed_country_codes: Option<Vec<String>>,
    /// Require the 2-letter country code to be spelled out.
    pub require_country_code: bool,
}

/// Why an IBAN was rejected by an [`IbanPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanPolicyViolation {
    /// The IBAN failed core validation before any policy was applied.
    #[error("not a valid IBAN")]
    InvalidIban,
    /// The policy requires an explicit country code and none was given.
    #[error("IBAN must start with an explicit country code")]
    CountryCodeRequired,
    /// The IBAN's country is not on the allow-list.
    #[error("country code '{0}' is not allowed")]
    CountryNotAllowed(String),
    /// The Polish bank is not on the allow-list.
    #[error("bank '{0}' is not allowed")]
    BankNotAllowed(String),
}

impl IbanPolicy {
    /// Check an IBAN against core validation plus this policy.
    pub fn check(&self, iban: &str) -> Result<(), IbanPolicyViolation> {
        let normalized = strip_whitespace(iban).to_uppercase();
        let has_country_code = normalized.len() >= 2
            && normalized.as_bytes()[0].is_ascii_alphabetic()
            && normalized.as_bytes()[1].is_ascii_alphabetic();

        if self.require_country_code && !has_country_code {
            return Err(IbanPolicyViolation::CountryCodeRequired);
        }
        if !is_iban_valid(iban) {
            return Err(IbanPolicyViolation::InvalidIban);
        }

        if let Some(allowed) = &self.allowed_country_codes {
            let country_code = if has_country_code {
                &normalized[..2]
            } else {
                "PL"
            };
            if !allowed.iter().any(|c| c == country_code) {
                return Err(IbanPolicyViolation::CountryNotAllowed(
                    country_code.to_string(),
                ));
            }
        }

        if let Some(allowed) = &self.allowed_bank_names {
            if let Some(bank_name) = bank_name_for_iban(&normalized) {
                if !allowed.iter().any(|b| b == bank_name) {
                    return Err(IbanPolicyViolation::BankNotAllowed(bank_name.to_string()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_polish_iban_with_spaces() {
        assert!(is_iban_valid("PL47 1140 2004 0000 3312 1564 8766"));
    }

    #[test]
    fn valid_polish_iban_without_country_code() {
        assert!(is_iban_valid("47114020040000331215648766"));
    }

    #[test]
    fn valid_foreign_iban() {
        assert!(is_iban_valid("AT61 1904300 234573201"));
    }

    #[test]
    fn lowercase_accepted() {
        assert!(is_iban_valid("pl47114020040000331215648766"));
    }

    #[test]
    fn wrong_length_for_country_rejected() {
        // Austrian IBANs are exactly 20 characters.
        assert!(!is_iban_valid("AT61190430023457320"));
    }

    #[test]
    fn unknown_polish_bank_code_rejected() {
        // The mod-97 checksum is correct, but 099 is not a known sort code.
        assert!(!is_iban_valid("PL57099010140000071219812874"));
        assert!(!is_iban_valid("PL61099010140000071219812874"));
    }

    #[test]
    fn known_bank_code_with_bad_checksum_rejected() {
        assert!(!is_iban_valid("PL48114020040000331215648766"));
    }

    #[test]
    fn unknown_country_rejected() {
        assert!(!is_iban_valid("XX611904300234573201"));
    }

    #[test]
    fn non_whitespace_separators_rejected() {
        assert!(!is_iban_valid("AT61-1904300234573201"));
    }

    #[test]
    fn empty_rejected() {
        assert!(!is_iban_valid(""));
    }

    #[test]
    fn country_data_from_code_alone() {
        let data = country_data_for_iban("pl").unwrap();
        assert_eq!(data.country, "Polska");
        assert_eq!(data.length, 28);

        let data = country_data_for_iban("AT").unwrap();
        assert_eq!(data.country, "Austria");
        assert_eq!(data.length, 20);
    }

    #[test]
    fn country_data_from_full_iban() {
        let data = country_data_for_iban("PL47 1140 2004 0000 3312 1564 8766").unwrap();
        assert_eq!(data.country, "Polska");
    }

    #[test]
    fn country_data_unknown_or_short_is_none() {
        assert!(country_data_for_iban("P").is_none());
        assert!(country_data_for_iban("XX").is_none());
        assert!(country_data_for_iban("").is_none());
    }

    #[test]
    fn bank_name_for_polish_iban() {
        assert_eq!(
            bank_name_for_iban("PL47 1140 2004 0000 3312 1564 8766"),
            Some("mBank")
        );
    }

    #[test]
    fn bank_name_for_foreign_iban_is_none() {
        assert_eq!(bank_name_for_iban("AT611904300234573201"), None);
    }

    #[test]
    fn bank_name_for_unknown_code_is_none() {
        assert_eq!(bank_name_for_iban("PL61099010140000071219812874"), None);
    }

    #[test]
    fn bank_full_name_for_polish_iban() {
        assert_eq!(
            bank_full_name_for_iban("PL47 1140 2004 0000 3312 1564 8766"),
            Some("mBank Spółka Akcyjna")
        );
    }

    #[test]
    fn bank_full_name_covers_cooperative_codes() {
        // 800 only exists in the full-name table.
        assert_eq!(bank_name_for_iban("PL02800000000000000000000000"), None);
        assert_eq!(
            bank_full_name_for_iban("PL02800000000000000000000000"),
            Some("Bank Spółdzielczy w Otwocku")
        );
    }

    #[test]
    fn tables_are_sorted() {
        for window in IBAN_COUNTRY_DATA.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
        for window in BANK_NAMES.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
        for window in BANK_FULL_NAMES.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
    }

    #[test]
    fn policy_default_only_requires_validity() {
        let policy = IbanPolicy::default();
        assert_eq!(policy.check("PL47 1140 2004 0000 3312 1564 8766"), Ok(()));
        assert_eq!(
            policy.check("PL61099010140000071219812874"),
            Err(IbanPolicyViolation::InvalidIban)
        );
    }

    #[test]
    fn policy_requires_country_code() {
        let policy = IbanPolicy {
            require_country_code: true,
            ..Default::default()
        };
        assert_eq!(
            policy.check("47114020040000331215648766"),
            Err(IbanPolicyViolation::CountryCodeRequired)
        );
        assert_eq!(policy.check("PL47114020040000331215648766"), Ok(()));
    }

    #[test]
    fn policy_restricts_countries() {
        let policy = IbanPolicy {
            allowed_country_codes: Some(vec!["PL".into()]),
            ..Default::default()
        };
        assert_eq!(policy.check("PL47114020040000331215648766"), Ok(()));
        // An implicit country code counts as PL.
        assert_eq!(policy.check("47114020040000331215648766"), Ok(()));
        assert_eq!(
            policy.check("AT611904300234573201"),
            Err(IbanPolicyViolation::CountryNotAllowed("AT".into()))
        );
    }

    #[test]
    fn policy_restricts_banks() {
        let policy = IbanPolicy {
            allowed_bank_names: Some(vec!["PKO BP".into()]),
            ..Default::default()
        };
        assert_eq!(
            policy.check("PL47114020040000331215648766"),
            Err(IbanPolicyViolation::BankNotAllowed("mBank".into()))
        );
        // Foreign IBANs have no Polish bank name, so the list does not apply.
        assert_eq!(policy.check("AT611904300234573201"), Ok(()));
    }
}
