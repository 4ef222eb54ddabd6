//! Pre-loaded cosmic-prophecy verses (KJV)
//!
//! The searchable baseline corpus: passages whose imagery is celestial,
//! whether prophetic, historical, or doxological.

use prophecy_domain::SearchRecord;
use serde::Serialize;

/// A scripture passage about celestial phenomena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CosmicVerse {
    /// Verse reference, e.g. "Joel 2:31"
    pub reference: &'static str,
    /// Verse text (KJV)
    pub text: &'static str,
}

/// The pre-loaded cosmic-prophecy corpus.
pub const COSMIC_VERSES: &[CosmicVerse] = &[
    CosmicVerse {
        reference: "Joel 2:31",
        text: "The sun shall be turned into darkness, and the moon into blood, before the great and terrible day of the LORD come.",
    },
    CosmicVerse {
        reference: "Matthew 24:29",
        text: "Immediately after the tribulation of those days shall the sun be darkened, and the moon shall not give her light, and the stars shall fall from heaven, and the powers of the heavens shall be shaken.",
    },
    CosmicVerse {
        reference: "Revelation 6:12-13",
        text: "And I beheld when he had opened the sixth seal, and, lo, there was a great earthquake; and the sun became black as sackcloth of hair, and the moon became as blood; And the stars of heaven fell unto the earth.",
    },
    CosmicVerse {
        reference: "Isaiah 13:10",
        text: "For the stars of heaven and the constellations thereof shall not give their light: the sun shall be darkened in his going forth, and the moon shall not cause her light to shine.",
    },
    CosmicVerse {
        reference: "Luke 21:25-26",
        text: "And there shall be signs in the sun, and in the moon, and in the stars; and upon the earth distress of nations, with perplexity; the sea and the waves roaring; Men's hearts failing them for fear.",
    },
    CosmicVerse {
        reference: "Revelation 12:1",
        text: "And there appeared a great wonder in heaven; a woman clothed with the sun, and the moon under her feet, and upon her head a crown of twelve stars.",
    },
    CosmicVerse {
        reference: "Amos 5:8",
        text: "Seek him that maketh the seven stars and Orion, and turneth the shadow of death into the morning, and maketh the day dark with night.",
    },
    CosmicVerse {
        reference: "Job 38:31-32",
        text: "Canst thou bind the sweet influences of Pleiades, or loose the bands of Orion? Canst thou bring forth Mazzaroth in his season? or canst thou guide Arcturus with his sons?",
    },
    CosmicVerse {
        reference: "2 Peter 1:19",
        text: "We have also a more sure word of prophecy; whereunto ye do well that ye take heed, as unto a light that shineth in a dark place, until the day dawn, and the day star arise in your hearts.",
    },
    CosmicVerse {
        reference: "Revelation 22:16",
        text: "I Jesus have sent mine angel to testify unto you these things in the churches. I am the root and the offspring of David, and the bright and morning star.",
    },
    CosmicVerse {
        reference: "Numbers 24:17",
        text: "I shall see him, but not now: I shall behold him, but not nigh: there shall come a Star out of Jacob, and a Sceptre shall rise out of Israel.",
    },
    CosmicVerse {
        reference: "Ezekiel 32:7-8",
        text: "And when I shall put thee out, I will cover the heaven, and make the stars thereof dark; I will cover the sun with a cloud, and the moon shall not give her light. All the bright lights of heaven will I make dark over thee.",
    },
    CosmicVerse {
        reference: "Acts 2:19-20",
        text: "And I will shew wonders in heaven above, and signs in the earth beneath; blood, and fire, and vapour of smoke: The sun shall be turned into darkness, and the moon into blood.",
    },
    CosmicVerse {
        reference: "Mark 13:24-25",
        text: "But in those days, after that tribulation, the sun shall be darkened, and the moon shall not give her light, And the stars of heaven shall fall, and the powers that are in heaven shall be shaken.",
    },
    CosmicVerse {
        reference: "Genesis 1:14-16",
        text: "And God said, Let there be lights in the firmament of the heaven to divide the day from the night; and let them be for signs, and for seasons, and for days, and years.",
    },
];

/// The corpus as owned records, ready for the keyword ranker or an index.
pub fn cosmic_corpus() -> Vec<SearchRecord> {
    COSMIC_VERSES
        .iter()
        .map(|v| SearchRecord::new(v.reference, v.text))
        .collect()
}

/// Look up a verse by exact (case-insensitive) reference.
pub fn find_verse(reference: &str) -> Option<&'static CosmicVerse> {
    COSMIC_VERSES
        .iter()
        .find(|v| v.reference.eq_ignore_ascii_case(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_not_empty() {
        assert!(!COSMIC_VERSES.is_empty());
    }

    #[test]
    fn test_joel_blood_moon_verse_exists() {
        let joel = find_verse("Joel 2:31").expect("Joel 2:31 missing");
        assert!(joel.text.to_lowercase().contains("blood"));
    }

    #[test]
    fn test_revelation_12_verse_exists() {
        let rev = find_verse("Revelation 12:1").expect("Revelation 12:1 missing");
        assert!(rev.text.to_lowercase().contains("sun"));
    }

    #[test]
    fn test_all_verses_mention_celestial_objects() {
        let objects = [
            "sun", "moon", "star", "heaven", "pleiades", "orion", "arcturus", "mazzaroth",
            "constellation", "firmament",
        ];
        for verse in COSMIC_VERSES {
            let text = verse.text.to_lowercase();
            assert!(
                objects.iter().any(|o| text.contains(o)),
                "{} has no celestial reference",
                verse.reference
            );
        }
    }

    #[test]
    fn test_reference_format() {
        for verse in COSMIC_VERSES {
            let last = verse.reference.split(' ').next_back().unwrap();
            assert!(last.contains(':'), "{} lacks chapter:verse", verse.reference);
        }
    }

    #[test]
    fn test_corpus_conversion_preserves_order() {
        let corpus = cosmic_corpus();
        assert_eq!(corpus.len(), COSMIC_VERSES.len());
        assert_eq!(corpus[0].reference, COSMIC_VERSES[0].reference);
    }
}
