//! Static region → university allow-list
//!
//! Selecting regions on the map constrains eligibility to universities
//! located there. Unknown region names contribute nothing.

pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "Scotland",
        &[
            "Abertay University",
            "University of Aberdeen",
            "University of Dundee",
            "University of Edinburgh",
            "University of Glasgow",
            "University of St Andrews",
            "University of Stirling",
            "University of Strathclyde",
            "Heriot-Watt University",
            "Edinburgh Napier University",
            "Glasgow Caledonian University",
            "Queen Margaret University",
            "Robert Gordon University",
            "University of the Highlands and Islands",
            "University of the West of Scotland",
            "Scotland's Rural College",
            "The Open University in Scotland",
            "Glasgow School of Art",
            "Royal Conservatoire of Scotland",
        ],
    ),
    (
        "Wales",
        &[
            "Aberystwyth University",
            "Bangor University",
            "Cardiff University",
            "Swansea University",
            "University of South Wales",
            "Cardiff Metropolitan University",
            "University of Wales Trinity Saint David",
            "Wrexham Glyndwr University",
        ],
    ),
    (
        "North West",
        &[
            "University of Manchester",
            "University of Liverpool",
            "Lancaster University",
            "University of Chester",
            "Edge Hill University",
            "Liverpool John Moores University",
            "Manchester Metropolitan University",
            "University of Salford",
            "University of Central Lancashire",
            "University of Bolton",
            "Liverpool Hope University",
            "University of Cumbria",
        ],
    ),
    (
        "North East",
        &[
            "Newcastle University",
            "Durham University",
            "University of Sunderland",
            "Northumbria University",
            "Teesside University",
        ],
    ),
    (
        "Yorkshire and the Humber",
        &[
            "University of Leeds",
            "University of Sheffield",
            "University of York",
            "Leeds Beckett University",
            "Sheffield Hallam University",
            "University of Hull",
            "University of Bradford",
            "University of Huddersfield",
            "Leeds Trinity University",
            "Leeds Arts University",
            "York St John University",
        ],
    ),
    (
        "East Midlands",
        &[
            "University of Nottingham",
            "Loughborough University",
            "University of Leicester",
            "De Montfort University",
            "Nottingham Trent University",
            "University of Lincoln",
            "University of Derby",
            "University of Northampton",
            "Bishop Grosseteste University",
        ],
    ),
    (
        "Anglia",
        &[
            "University of Cambridge",
            "University of East Anglia",
            "Anglia Ruskin University",
            "University of Essex",
            "University of Suffolk",
            "Norwich University of the Arts",
            "University of Hertfordshire",
            "University of Bedfordshire",
            "Cranfield University",
            "Writtle University College",
        ],
    ),
    (
        "South West",
        &[
            "University of Exeter",
            "University of Bristol",
            "University of Bath",
            "University of Plymouth",
            "Falmouth University",
            "University of the West of England (UWE Bristol)",
            "Bath Spa University",
            "Arts University Bournemouth",
            "Plymouth Marjon University",
            "University of Gloucestershire",
            "Royal Agricultural University",
            "Bournemouth University",
            "Arts University Plymouth",
        ],
    ),
    (
        "South East",
        &[
            "University of Oxford",
            "University of Sussex",
            "University of Reading",
            "University of Kent",
            "University of Southampton",
            "University of Surrey",
            "University of Brighton",
            "University of Portsmouth",
            "Oxford Brookes University",
            "Royal Holloway, University of London",
            "University of Winchester",
            "University of Chichester",
            "Canterbury Christ Church University",
            "University for the Creative Arts",
            "Buckinghamshire New University",
            "Solent University",
            "University of Buckingham",
        ],
    ),
    (
        "London",
        &[
            "Imperial College London",
            "University College London",
            "King's College London",
            "London School of Economics",
            "Queen Mary University of London",
            "Birkbeck, University of London",
            "Brunel University London",
            "City, University of London",
            "Goldsmiths, University of London",
            "London Business School",
            "London Metropolitan University",
            "London School of Hygiene & Tropical Medicine",
            "London South Bank University",
            "Middlesex University",
            "Royal Academy of Music",
            "Royal College of Art",
            "Royal College of Music",
            "Royal Holloway, University of London",
            "Royal Veterinary College",
            "School of Oriental and African Studies (SOAS), University of London",
            "St George's, University of London",
            "University of East London",
            "University of Greenwich",
            "University of London",
            "University of Roehampton",
            "University of the Arts London",
            "University of West London",
            "University of Westminster",
        ],
    ),
    (
        "Northern Ireland",
        &[
            "Queen's University Belfast",
            "Ulster University",
            "St Mary's University College",
            "Stranmillis University College",
            "The Open University in Northern Ireland",
        ],
    ),
    (
        "West Midlands",
        &[
            "University of Birmingham",
            "Aston University",
            "University of Warwick",
            "Coventry University",
            "University of Wolverhampton",
            "Birmingham City University",
            "University College Birmingham",
            "Newman University",
            "Harper Adams University",
        ],
    ),
];

/// Universities in a named region, or None for unknown regions
pub fn universities_in(region: &str) -> Option<&'static [&'static str]> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, universities)| *universities)
}
