use crate::models::Verdict;

#[derive(Debug)]
pub struct CannedSource {
    pub title: &'static str,
    pub snippet: &'static str,
    pub link: &'static str,
}

#[derive(Debug)]
pub struct StoreEntry {
    /// Space separated keyword phrase, already lower case.
    pub key: &'static str,
    /// Expected outcome for demos. Never consulted by aggregation.
    pub verdict_hint: Verdict,
    pub sources: &'static [CannedSource],
}

pub static BUILTIN_ENTRIES: &[StoreEntry] = &[
    StoreEntry {
        key: "great wall china visible space",
        verdict_hint: Verdict::False,
        sources: &[
            CannedSource {
                title: "NASA Debunks Great Wall Space Visibility Myth",
                snippet: "NASA scientists confirm that the Great Wall of China cannot be seen from space with the naked eye. The myth persists despite repeated scientific corrections.",
                link: "https://www.nasa.gov/space/great-wall-myth",
            },
            CannedSource {
                title: "Snopes: Can You See the Great Wall From Space?",
                snippet: "The Great Wall is not visible from space without aid. This common myth has been debunked by astronauts and space agencies worldwide.",
                link: "https://www.snopes.com/fact-check/great-wall-space",
            },
        ],
    },
    StoreEntry {
        key: "water boils 100 degrees celsius",
        verdict_hint: Verdict::True,
        sources: &[
            CannedSource {
                title: "Britannica: Boiling Point of Water",
                snippet: "Water boils at 100 degrees Celsius (212°F) at standard atmospheric pressure. This is a fundamental, well-established reference point in science.",
                link: "https://www.britannica.com/science/boiling-point",
            },
            CannedSource {
                title: "USGS: Water Properties and Facts",
                snippet: "At sea level, pure water reaches its boiling point at exactly 100°C. This well-established scientific fact is used worldwide.",
                link: "https://www.usgs.gov/water-science/water-properties",
            },
            CannedSource {
                title: "Chemistry LibreTexts: Water Properties",
                snippet: "The boiling point of pure water at standard atmospheric pressure is 100 degrees Celsius. This is a reliable and well-documented scientific fact.",
                link: "https://chem.libretexts.org/water-boiling-point",
            },
        ],
    },
    StoreEntry {
        key: "lightning never strikes same place twice",
        verdict_hint: Verdict::False,
        sources: &[CannedSource {
            title: "National Weather Service: Lightning Myths",
            snippet: "Lightning can and does strike the same place multiple times. The Empire State Building is struck about 25 times per year.",
            link: "https://www.weather.gov/safety/lightning-myths",
        }],
    },
    StoreEntry {
        key: "vaccines cause autism",
        verdict_hint: Verdict::False,
        sources: &[
            CannedSource {
                title: "CDC: Vaccines Do Not Cause Autism",
                snippet: "Multiple large-scale studies have found no link between vaccines and autism. The original study claiming a connection was fraudulent and retracted.",
                link: "https://www.cdc.gov/vaccinesafety/concerns/autism.html",
            },
            CannedSource {
                title: "WHO: Vaccine Safety and Autism",
                snippet: "The World Health Organization confirms that vaccines are safe and do not cause autism. Extensive research has debunked this myth.",
                link: "https://www.who.int/vaccine_safety/committee/topics/autism/en/",
            },
            CannedSource {
                title: "Medical Consensus: Vaccines and Autism",
                snippet: "The medical community unanimously agrees that vaccines do not cause autism. This false claim has been thoroughly debunked by science.",
                link: "https://www.aap.org/vaccine-autism-studies",
            },
        ],
    },
    StoreEntry {
        key: "jupiter largest planet solar system",
        verdict_hint: Verdict::True,
        sources: &[
            CannedSource {
                title: "NASA: Jupiter Facts and Information",
                snippet: "Jupiter is the largest planet in our solar system, with a mass greater than all other planets combined. It is a gas giant located fifth from the Sun.",
                link: "https://www.nasa.gov/jupiter",
            },
            CannedSource {
                title: "Planetary Society: Jupiter Overview",
                snippet: "Jupiter is by far the largest planet in our solar system, with a diameter of about 88,695 miles (142,800 kilometers).",
                link: "https://www.planetary.org/worlds/jupiter",
            },
        ],
    },
    StoreEntry {
        key: "humans have 48 chromosomes",
        verdict_hint: Verdict::False,
        sources: &[
            CannedSource {
                title: "National Human Genome Research Institute",
                snippet: "Humans have 46 chromosomes arranged in 23 pairs. This is different from some other species - for example, chimpanzees have 48 chromosomes.",
                link: "https://www.genome.gov/about-genomics/fact-sheets/Chromosomes-Fact-Sheet",
            },
            CannedSource {
                title: "Genetics Home Reference: Human Chromosomes",
                snippet: "Normal human cells contain 46 chromosomes, not 48. Each person receives 23 chromosomes from each parent, totaling 46.",
                link: "https://ghr.nlm.nih.gov/primer/basics/howmanychromosomes",
            },
        ],
    },
];
