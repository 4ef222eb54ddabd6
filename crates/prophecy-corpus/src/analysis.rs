//! Categorized verse analyses
//!
//! Layered categorization: scholarly baseline, category schema, reasoning,
//! and transparency about alternatives. Each record carries everything a
//! display layer needs to justify why a passage is (or is not) a candidate
//! for astronomical visualization.

use crate::category::CelestialCategory;
use serde::Serialize;

/// A citation backing a categorization decision.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScholarlySource {
    /// Source name, e.g. "Strong's H1818"
    pub name: &'static str,
    /// Source kind: lexicon, cross-reference, topical, ...
    pub kind: &'static str,
    /// What the source says or points at
    pub reference: &'static str,
}

/// A competing interpretation with its own confidence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlternativeCategory {
    /// The alternative category
    pub category: CelestialCategory,
    /// Confidence in the alternative, [0, 1]
    pub confidence: f64,
    /// Why the alternative is plausible
    pub rationale: &'static str,
}

/// A fully analyzed celestial passage.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategorizedVerse {
    /// Verse reference
    pub reference: &'static str,
    /// Verse text (KJV)
    pub text: &'static str,
    /// Primary category
    pub category: CelestialCategory,
    /// Confidence in the primary category, [0, 1]
    pub confidence: f64,
    /// Why the category was assigned
    pub reasoning: &'static str,
    /// Celestial objects mentioned
    pub celestial_objects: &'static [&'static str],
    /// Related passages
    pub cross_references: &'static [&'static str],
    /// Citations behind the decision
    pub scholarly_sources: &'static [ScholarlySource],
    /// Competing interpretations, if scholars disagree
    pub alternative_categories: &'static [AlternativeCategory],
    /// Candidate dates worth visualizing, if any
    pub date_candidates: &'static [&'static str],
    /// Hebrew/Greek notes, if illuminating
    pub language_notes: Option<&'static str>,
    /// Literary genre
    pub genre: &'static str,
    /// Placement within its book
    pub book_context: &'static str,
}

/// The analyzed passages.
pub const CATEGORIZED_VERSES: &[CategorizedVerse] = &[
    CategorizedVerse {
        reference: "Joel 2:31",
        text: "The sun shall be turned into darkness, and the moon into blood, before the great and terrible day of the LORD come.",
        category: CelestialCategory::PropheticSign,
        confidence: 0.95,
        reasoning: "Apocalyptic prophecy describing future celestial signs preceding the Day of the Lord. Genre is prophetic oracle; language is predictive. Quoted by Peter in Acts 2:20 as prophecy being fulfilled.",
        celestial_objects: &["sun", "moon"],
        cross_references: &["Acts 2:20", "Matthew 24:29", "Revelation 6:12", "Isaiah 13:10"],
        scholarly_sources: &[
            ScholarlySource {
                name: "Treasury of Scripture Knowledge",
                kind: "cross-reference",
                reference: "Joel 2:31",
            },
            ScholarlySource {
                name: "Strong's H1818",
                kind: "lexicon",
                reference: "dam (blood) - literal blood color",
            },
        ],
        alternative_categories: &[],
        date_candidates: &["Lunar eclipses (blood moon)", "Solar eclipses"],
        language_notes: Some(
            "Hebrew 'dam' (blood) suggests red coloration; 'choshek' (darkness) is the same word used for the plague of darkness in Exodus",
        ),
        genre: "Prophetic Oracle",
        book_context: "Joel prophesying about Day of the Lord judgments and restoration",
    },
    CategorizedVerse {
        reference: "Matthew 24:29",
        text: "Immediately after the tribulation of those days shall the sun be darkened, and the moon shall not give her light, and the stars shall fall from heaven, and the powers of the heavens shall be shaken.",
        category: CelestialCategory::PropheticSign,
        confidence: 0.95,
        reasoning: "Jesus's Olivet Discourse describing end-times signs. Direct prophetic statement about future celestial events, echoing Joel 2:31 and Isaiah 13:10.",
        celestial_objects: &["sun", "moon", "stars", "heavens"],
        cross_references: &["Joel 2:31", "Isaiah 13:10", "Mark 13:24-25", "Luke 21:25-26"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's G4655",
            kind: "lexicon",
            reference: "skotizo (darkened) - literal darkening",
        }],
        alternative_categories: &[],
        date_candidates: &["Future fulfillment", "70 AD (partial/typological)"],
        language_notes: None,
        genre: "Prophetic Discourse",
        book_context: "Olivet Discourse - Jesus answering questions about end times",
    },
    CategorizedVerse {
        reference: "Revelation 12:1-2",
        text: "And there appeared a great wonder in heaven; a woman clothed with the sun, and the moon under her feet, and upon her head a crown of twelve stars: And she being with child cried, travailing in birth, and pained to be delivered.",
        category: CelestialCategory::Uncertain,
        confidence: 0.60,
        reasoning: "Apocalyptic vision with celestial imagery. Scholars debate a purely symbolic woman (Israel/Church), a literal astronomical alignment in Virgo, or both. The genre frequently uses symbolic imagery.",
        celestial_objects: &["sun", "moon", "stars (twelve)"],
        cross_references: &["Genesis 37:9", "Isaiah 66:7", "Micah 5:3"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's G4592",
            kind: "lexicon",
            reference: "semeion (wonder/sign) - can be literal or symbolic",
        }],
        alternative_categories: &[
            AlternativeCategory {
                category: CelestialCategory::PropheticSign,
                confidence: 0.40,
                rationale: "If interpreted as a literal astronomical alignment",
            },
            AlternativeCategory {
                category: CelestialCategory::Metaphorical,
                confidence: 0.50,
                rationale: "If interpreted as symbolic of Israel/Mary/Church",
            },
        ],
        date_candidates: &[
            "September 23, 2017 (Virgo alignment)",
            "3 BC (at Christ's birth)",
            "Future fulfillment",
        ],
        language_notes: Some("Greek 'semeion mega' (great sign) - same word used for miraculous signs"),
        genre: "Apocalyptic Vision",
        book_context: "John's vision on Patmos - highly symbolic apocalyptic literature",
    },
    CategorizedVerse {
        reference: "Genesis 1:14-16",
        text: "And God said, Let there be lights in the firmament of the heaven to divide the day from the night; and let them be for signs, and for seasons, and for days, and years.",
        category: CelestialCategory::CreationAccount,
        confidence: 0.98,
        reasoning: "Creation narrative establishing the purpose of celestial bodies. The key word 'signs' (Hebrew 'owth') indicates a legitimate sign function; foundational text for biblical astronomy.",
        celestial_objects: &["sun", "moon", "stars"],
        cross_references: &["Psalm 104:19", "Jeremiah 31:35", "Psalm 136:7-9"],
        scholarly_sources: &[
            ScholarlySource {
                name: "Strong's H226",
                kind: "lexicon",
                reference: "owth (signs) - signal, distinguishing mark, miraculous sign",
            },
            ScholarlySource {
                name: "Strong's H4150",
                kind: "lexicon",
                reference: "moed (seasons) - appointed times, festivals",
            },
        ],
        alternative_categories: &[],
        date_candidates: &[],
        language_notes: Some(
            "'Moed' (seasons) means appointed times/festivals, not just weather seasons",
        ),
        genre: "Creation Narrative",
        book_context: "Genesis creation account - foundational cosmology",
    },
    CategorizedVerse {
        reference: "Matthew 2:2",
        text: "Saying, Where is he that is born King of the Jews? for we have seen his star in the east, and are come to worship him.",
        category: CelestialCategory::HistoricalEvent,
        confidence: 0.90,
        reasoning: "Historical narrative of the Magi observing an astronomical phenomenon, presented as an actual event that guided them to a specific location. Multiple astronomical identifications exist.",
        celestial_objects: &["star (his star)"],
        cross_references: &["Numbers 24:17", "Isaiah 60:3", "Matthew 2:7-10"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's G792",
            kind: "lexicon",
            reference: "aster (star) - literal star or celestial object",
        }],
        alternative_categories: &[AlternativeCategory {
            category: CelestialCategory::PropheticSign,
            confidence: 0.30,
            rationale: "If fulfilling the Numbers 24:17 prophecy",
        }],
        date_candidates: &[
            "7 BC - Jupiter-Saturn conjunction",
            "6 BC - Chinese/Korean nova records",
            "3-2 BC - Jupiter-Regulus conjunctions",
            "2 BC - Jupiter-Venus conjunction (June 17)",
        ],
        language_notes: Some(
            "Greek 'aster' is a generic term for any celestial light source - star, planet, comet, or nova",
        ),
        genre: "Historical Narrative",
        book_context: "Matthew's nativity account - historical gospel narrative",
    },
    CategorizedVerse {
        reference: "Genesis 37:9",
        text: "And he dreamed yet another dream, and told it his brethren, and said, Behold, I have dreamed a dream more; and, behold, the sun and the moon and the eleven stars made obeisance to me.",
        category: CelestialCategory::Metaphorical,
        confidence: 0.95,
        reasoning: "Joseph's dream uses celestial imagery symbolically; context makes the mapping explicit (sun=Jacob, moon=Rachel/Leah, stars=brothers). Not an astronomical event.",
        celestial_objects: &["sun", "moon", "stars (eleven)"],
        cross_references: &["Revelation 12:1", "Genesis 37:10"],
        scholarly_sources: &[],
        alternative_categories: &[],
        date_candidates: &[],
        language_notes: Some("Same celestial vocabulary, clearly symbolic in context"),
        genre: "Narrative (Dream Account)",
        book_context: "Joseph narrative - dreams foreshadowing his rise",
    },
    CategorizedVerse {
        reference: "Deuteronomy 4:19",
        text: "And lest thou lift up thine eyes unto heaven, and when thou seest the sun, and the moon, and the stars, even all the host of heaven, shouldest be driven to worship them, and serve them.",
        category: CelestialCategory::CondemnedPractice,
        confidence: 0.98,
        reasoning: "Direct prohibition against worshipping celestial bodies. Distinguishes observing celestial signs (permitted, Genesis 1:14) from worshipping them (forbidden).",
        celestial_objects: &["sun", "moon", "stars", "host of heaven"],
        cross_references: &["Deuteronomy 17:3", "2 Kings 21:3", "Jeremiah 8:2"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's H6635",
            kind: "lexicon",
            reference: "tsaba (host) - army, used for stars as heavenly army",
        }],
        alternative_categories: &[],
        date_candidates: &[],
        language_notes: Some(
            "'Tsaba hashamayim' (host of heaven) becomes the technical term for astral worship throughout the OT",
        ),
        genre: "Legal/Covenant",
        book_context: "Deuteronomic law - Moses's final instructions",
    },
    CategorizedVerse {
        reference: "Isaiah 47:13",
        text: "Thou art wearied in the multitude of thy counsels. Let now the astrologers, the stargazers, the monthly prognosticators, stand up, and save thee from these things that shall come upon thee.",
        category: CelestialCategory::CondemnedPractice,
        confidence: 0.98,
        reasoning: "Prophetic mockery of Babylonian astrologers in an oracle of judgment. Condemns divination by stars, not astronomical observation.",
        celestial_objects: &["stars (for divination)"],
        cross_references: &["Daniel 2:27", "Isaiah 44:25", "Jeremiah 10:2"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's H1895",
            kind: "lexicon",
            reference: "habar (astrologers) - divide heavens for omens",
        }],
        alternative_categories: &[],
        date_candidates: &[],
        language_notes: None,
        genre: "Prophetic Oracle (Judgment)",
        book_context: "Isaiah's oracle against Babylon",
    },
    CategorizedVerse {
        reference: "Job 38:31-32",
        text: "Canst thou bind the sweet influences of Pleiades, or loose the bands of Orion? Canst thou bring forth Mazzaroth in his season? or canst thou guide Arcturus with his sons?",
        category: CelestialCategory::WorshipPraise,
        confidence: 0.85,
        reasoning: "God questioning Job about celestial objects to demonstrate divine sovereignty. Names specific star groups, showing ancient Hebrew astronomical knowledge.",
        celestial_objects: &["Pleiades", "Orion", "Mazzaroth", "Arcturus"],
        cross_references: &["Job 9:9", "Amos 5:8", "Isaiah 40:26"],
        scholarly_sources: &[
            ScholarlySource {
                name: "Strong's H3598",
                kind: "lexicon",
                reference: "Kimah (Pleiades) - cluster, heap",
            },
            ScholarlySource {
                name: "Strong's H4216",
                kind: "lexicon",
                reference: "Mazzaroth - possibly zodiac constellations",
            },
        ],
        alternative_categories: &[AlternativeCategory {
            category: CelestialCategory::CalendarMarker,
            confidence: 0.30,
            rationale: "If Mazzaroth refers to seasonal constellations",
        }],
        date_candidates: &[],
        language_notes: Some(
            "Mazzaroth is debated - possibly zodiac signs; some link to 'mazzaloth' in 2 Kings 23:5",
        ),
        genre: "Wisdom Literature (Divine Speech)",
        book_context: "God's response to Job from the whirlwind",
    },
    CategorizedVerse {
        reference: "Revelation 6:12-13",
        text: "And I beheld when he had opened the sixth seal, and, lo, there was a great earthquake; and the sun became black as sackcloth of hair, and the moon became as blood; And the stars of heaven fell unto the earth.",
        category: CelestialCategory::PropheticSign,
        confidence: 0.85,
        reasoning: "Sixth-seal judgment echoing Joel 2:31 language. Cosmic disturbances presented as future events, with live debate on literal vs symbolic reading.",
        celestial_objects: &["sun", "moon", "stars"],
        cross_references: &["Joel 2:31", "Isaiah 13:10", "Matthew 24:29", "Acts 2:20"],
        scholarly_sources: &[],
        alternative_categories: &[AlternativeCategory {
            category: CelestialCategory::Metaphorical,
            confidence: 0.35,
            rationale: "If apocalyptic imagery is purely symbolic",
        }],
        date_candidates: &["Future fulfillment", "Symbolic of judgment (non-datable)"],
        language_notes: None,
        genre: "Apocalyptic Vision",
        book_context: "Seven seals judgments in Revelation",
    },
    CategorizedVerse {
        reference: "Acts 2:19-20",
        text: "And I will shew wonders in heaven above, and signs in the earth beneath; blood, and fire, and vapour of smoke: The sun shall be turned into darkness, and the moon into blood, before the great and notable day of the Lord come.",
        category: CelestialCategory::PropheticSign,
        confidence: 0.95,
        reasoning: "Peter quoting Joel 2:30-31 at Pentecost, declaring prophetic fulfillment beginning. Apostolic interpretation confirms Joel's prophecy as actual celestial signs.",
        celestial_objects: &["sun", "moon", "heavens"],
        cross_references: &["Joel 2:30-31", "Matthew 24:29", "Revelation 6:12"],
        scholarly_sources: &[],
        alternative_categories: &[],
        date_candidates: &["Ongoing 'last days' period", "Specific future fulfillment"],
        language_notes: None,
        genre: "Apostolic Sermon",
        book_context: "Peter's Pentecost sermon - interpreting Joel's prophecy",
    },
    CategorizedVerse {
        reference: "Numbers 24:17",
        text: "I shall see him, but not now: I shall behold him, but not nigh: there shall come a Star out of Jacob, and a Sceptre shall rise out of Israel.",
        category: CelestialCategory::PropheticSign,
        confidence: 0.80,
        reasoning: "Balaam's oracle prophesying a future ruler from Israel. 'Star' is debated between metaphor for a king and a literal sign at Messiah's birth; the messianic reading is ancient.",
        celestial_objects: &["star (out of Jacob)"],
        cross_references: &["Matthew 2:2", "Revelation 22:16", "2 Peter 1:19"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's H3556",
            kind: "lexicon",
            reference: "kokab (star) - literal star or metaphor for ruler",
        }],
        alternative_categories: &[AlternativeCategory {
            category: CelestialCategory::Metaphorical,
            confidence: 0.45,
            rationale: "If 'star' is purely metaphor for a king",
        }],
        date_candidates: &["Star of Bethlehem candidates (3-2 BC)"],
        language_notes: Some(
            "Parallelism with 'sceptre' suggests royal metaphor, but the Magi may have read it astronomically",
        ),
        genre: "Prophetic Oracle",
        book_context: "Balaam's oracles blessing Israel",
    },
    CategorizedVerse {
        reference: "2 Peter 1:19",
        text: "We have also a more sure word of prophecy; whereunto ye do well that ye take heed, as unto a light that shineth in a dark place, until the day dawn, and the day star arise in your hearts.",
        category: CelestialCategory::Metaphorical,
        confidence: 0.95,
        reasoning: "'Day star' (phosphoros) as a metaphor for Christ's return and illumination in believers; celestial imagery for a spiritual reality, not a predicted event.",
        celestial_objects: &["day star (morning star/Venus)"],
        cross_references: &["Revelation 22:16", "Malachi 4:2", "Numbers 24:17"],
        scholarly_sources: &[ScholarlySource {
            name: "Strong's G5459",
            kind: "lexicon",
            reference: "phosphoros (day star) - light-bearer, Venus",
        }],
        alternative_categories: &[],
        date_candidates: &[],
        language_notes: Some("Greek 'phosphoros' = Latin 'lucifer', the light-bearer (Venus)"),
        genre: "Epistle (Exhortation)",
        book_context: "Peter encouraging believers to heed prophetic Scripture",
    },
];

/// All verses in a given category.
pub fn verses_by_category(category: CelestialCategory) -> Vec<&'static CategorizedVerse> {
    CATEGORIZED_VERSES
        .iter()
        .filter(|v| v.category == category)
        .collect()
}

/// Verses whose category describes real astronomical phenomena.
pub fn astronomically_relevant_verses() -> Vec<&'static CategorizedVerse> {
    CATEGORIZED_VERSES
        .iter()
        .filter(|v| v.category.info().astronomically_relevant == Some(true))
        .collect()
}

/// Verses with at least one candidate date to visualize.
pub fn datable_verses() -> Vec<&'static CategorizedVerse> {
    CATEGORIZED_VERSES
        .iter()
        .filter(|v| !v.date_candidates.is_empty())
        .collect()
}

/// Verses whose primary categorization meets a confidence threshold.
pub fn high_confidence_verses(min_confidence: f64) -> Vec<&'static CategorizedVerse> {
    CATEGORIZED_VERSES
        .iter()
        .filter(|v| v.confidence >= min_confidence)
        .collect()
}

/// Find an analysis by reference. Exact case-insensitive match wins;
/// otherwise the query may be a substring of the reference.
pub fn find_analysis(reference: &str) -> Option<&'static CategorizedVerse> {
    let needle = reference.trim().to_lowercase();
    CATEGORIZED_VERSES
        .iter()
        .find(|v| v.reference.to_lowercase() == needle)
        .or_else(|| {
            CATEGORIZED_VERSES
                .iter()
                .find(|v| v.reference.to_lowercase().contains(&needle))
        })
}

/// Cross-references recorded for a verse, if it has been analyzed.
pub fn cross_references_for(reference: &str) -> Option<&'static [&'static str]> {
    find_analysis(reference).map(|v| v.cross_references)
}

/// Render a full analysis report for display.
pub fn format_verse_analysis(verse: &CategorizedVerse) -> String {
    let info = verse.category.info();
    let relevant = match info.astronomically_relevant {
        Some(true) => "yes",
        Some(false) => "no",
        None => "debated",
    };

    let mut lines = vec![
        format!("=== {} ===", verse.reference),
        format!("Category: {}", info.name),
        format!("Confidence: {:.0}%", verse.confidence * 100.0),
        format!("Astronomically Relevant: {}", relevant),
        String::new(),
        format!("Text: \"{}\"", verse.text),
        String::new(),
        format!("Genre: {}", verse.genre),
        format!("Context: {}", verse.book_context),
        String::new(),
        "REASONING:".to_string(),
        verse.reasoning.to_string(),
    ];

    if !verse.celestial_objects.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Celestial Objects: {}",
            verse.celestial_objects.join(", ")
        ));
    }

    if let Some(notes) = verse.language_notes {
        lines.push(format!("Original Language Notes: {}", notes));
    }

    if !verse.cross_references.is_empty() {
        lines.push(format!(
            "Cross-References: {}",
            verse.cross_references.join(", ")
        ));
    }

    if !verse.alternative_categories.is_empty() {
        lines.push("Alternative Interpretations:".to_string());
        for alt in verse.alternative_categories {
            lines.push(format!(
                "  - {} ({:.0}%): {}",
                alt.category.info().name,
                alt.confidence * 100.0,
                alt.rationale
            ));
        }
    }

    if !verse.date_candidates.is_empty() {
        lines.push("Candidate Dates for Visualization:".to_string());
        for date in verse.date_candidates {
            lines.push(format!("  - {}", date));
        }
    }

    if !verse.scholarly_sources.is_empty() {
        lines.push("Scholarly Sources:".to_string());
        for src in verse.scholarly_sources {
            lines.push(format!("  - {} ({}): {}", src.name, src.kind, src.reference));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_in_unit_interval() {
        for verse in CATEGORIZED_VERSES {
            assert!(
                (0.0..=1.0).contains(&verse.confidence),
                "{} confidence out of range",
                verse.reference
            );
            for alt in verse.alternative_categories {
                assert!((0.0..=1.0).contains(&alt.confidence));
            }
        }
    }

    #[test]
    fn test_by_category_filters() {
        for verse in verses_by_category(CelestialCategory::PropheticSign) {
            assert_eq!(verse.category, CelestialCategory::PropheticSign);
        }
        assert!(!verses_by_category(CelestialCategory::PropheticSign).is_empty());
    }

    #[test]
    fn test_relevant_excludes_metaphorical() {
        for verse in astronomically_relevant_verses() {
            assert_ne!(verse.category, CelestialCategory::Metaphorical);
            assert_ne!(verse.category, CelestialCategory::CondemnedPractice);
        }
    }

    #[test]
    fn test_datable_verses_have_candidates() {
        let datable = datable_verses();
        assert!(!datable.is_empty());
        for verse in datable {
            assert!(!verse.date_candidates.is_empty());
        }
    }

    #[test]
    fn test_high_confidence_threshold() {
        for verse in high_confidence_verses(0.9) {
            assert!(verse.confidence >= 0.9);
        }
    }

    #[test]
    fn test_find_analysis_exact_and_partial() {
        assert!(find_analysis("joel 2:31").is_some());
        // "Revelation 12" matches "Revelation 12:1-2" by substring
        let partial = find_analysis("Revelation 12").unwrap();
        assert_eq!(partial.reference, "Revelation 12:1-2");
        assert!(find_analysis("Nowhere 1:1").is_none());
    }

    #[test]
    fn test_cross_references_for_joel() {
        let refs = cross_references_for("Joel 2:31").unwrap();
        assert!(refs.contains(&"Acts 2:20"));
    }

    #[test]
    fn test_format_analysis_sections() {
        let verse = find_analysis("Matthew 2:2").unwrap();
        let report = format_verse_analysis(verse);
        assert!(report.contains("=== Matthew 2:2 ==="));
        assert!(report.contains("Historical Astronomical Event"));
        assert!(report.contains("Candidate Dates"));
        assert!(report.contains("Jupiter-Venus conjunction"));
    }

    #[test]
    fn test_serializes_to_json() {
        let verse = find_analysis("Joel 2:31").unwrap();
        let json = serde_json::to_string(verse).unwrap();
        assert!(json.contains("\"prophetic_sign\""));
    }
}
