//! End-to-end behaviour of the public summarization API.

use pretty_assertions::assert_eq;
use rapid_summarizer::nlp::segmenter::SentenceSegmenter;
use rapid_summarizer::summarizer::assembler::DISCLAIMER;
use rapid_summarizer::{
    fallback_summary, summarize, summarize_batch, summarize_document, Document,
    FrequencyAnalyzer, Preset, SentenceScorer, SummaryConfig, SummaryError, SummaryOptions,
    TextNormalizer,
};

const TOPIC_WORDS: [&str; 40] = [
    "glacier", "volcano", "harbor", "orchard", "lantern", "meadow", "canyon", "falcon", "quartz",
    "ember", "violin", "saddle", "tundra", "walnut", "cobalt", "pepper", "marble", "timber",
    "python", "rocket", "velvet", "garnet", "thistle", "badger", "copper", "nectar", "prism",
    "cedar", "mosaic", "anchor", "beacon", "cactus", "dagger", "fossil", "gravel", "heron",
    "island", "jasmine", "kettle", "lagoon",
];

/// One sentence per topic word; every other word is four letters or fewer
fn topic_sentence(t: &str) -> String {
    format!(
        "The {t} team saw the {t} plan grow a lot, and the {t} work was not easy but it was \
         fun to do each day for all of us in the lab, so the {t} goal is now set and the {t} \
         log will be kept up to date by the crew as we go on with the {t} job this year."
    )
}

fn long_document() -> String {
    TOPIC_WORDS
        .iter()
        .map(|t| topic_sentence(t))
        .collect::<Vec<_>>()
        .join(" ")
}

const LECTURE: &str = "Cell biology studies the structure and function of cells.\n\
    Every living organism is made of one or more cells, and cells arise from existing cells.\n\
    The plasma membrane controls what enters and leaves the cell.\n\n\
    Mitochondria produce most of the chemical energy needed by the cell.\n\
    Ribosomes assemble proteins from amino acids using messenger RNA.\n\
    The nucleus stores genetic information and coordinates cell growth.\n\n\
    Figure 2: A eukaryotic cell\n\
    Copyright 2021 Biology Press. All rights reserved.\n\
    One of the main differences between plant and animal cells is the cell wall.\n\
    Chloroplasts allow plant cells to perform photosynthesis using light energy.";

#[test]
fn scenario_a_boilerplate_removed_and_marker_raises_score() {
    let raw = "The quick brown fox. The fox is quick and important for the ecosystem. Page 1.";
    let normalized = TextNormalizer::with_defaults().normalize(raw);
    assert_eq!(
        normalized,
        "The quick brown fox. The fox is quick and important for the ecosystem."
    );

    let candidates = SentenceSegmenter::new().with_bounds(10, 200).segment(&normalized);
    assert_eq!(candidates.len(), 2);

    let table = FrequencyAnalyzer::default().analyze(&normalized);
    let scorer = SentenceScorer::default();
    let marked = scorer.score_one(&candidates[1].text, 1, 2, &table);
    let unmarked = scorer.score_one("The fox is quick and notable for the ecosystem.", 1, 2, &table);

    assert!(candidates[1].text.contains("important"));
    assert!(marked > unmarked);
}

#[test]
fn scenario_b_empty_input() {
    let result = summarize("", &SummaryOptions::default());
    assert!(matches!(result, Err(SummaryError::EmptyInput)));
}

#[test]
fn scenario_c_cap_order_and_diversity() {
    let text = long_document();
    assert!(text.len() >= 10_000);

    let options = SummaryOptions {
        max_key_points: 5,
        max_topics: 10,
        sentence_length_bounds: (20, 300),
    };
    let record = summarize(&text, &options).unwrap();

    assert_eq!(record.key_points.len(), 5);
    assert_eq!(record.metadata.sentence_count, 40);
    assert_eq!(record.metadata.relaxed_selections, 0);
    assert!(record
        .key_points
        .windows(2)
        .all(|w| w[0].position < w[1].position));

    let dominant: Vec<&str> = record
        .key_points
        .iter()
        .map(|kp| {
            TOPIC_WORDS
                .iter()
                .copied()
                .find(|t| kp.text.contains(t))
                .unwrap()
        })
        .collect();
    let mut distinct = dominant.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), 5);
}

#[test]
fn scenario_d_numeric_boost() {
    let table = FrequencyAnalyzer::default()
        .analyze("A 45% increase in revenue during 2023. Revenue and increase again.");
    let scorer = SentenceScorer::default();

    let with_digits = scorer.score_one("A 45% increase in revenue during 2023.", 0, 2, &table);
    let without = scorer.score_one("A big increase in revenue during fall.", 0, 2, &table);

    assert!(without > 0.0);
    assert!((with_digits / without - 1.2).abs() < 1e-9);
    assert!(
        (scorer.boost_multiplier("45% increase in revenue during 2023") - 1.2).abs() < 1e-9
    );
}

const COPYRIGHT_TRANSCRIPT: &str = "Today we are talking about copyright law and how it protects \
    creative work. Copyright gives authors exclusive rights to copy and distribute their work for \
    a limited time. Fair use lets teachers and critics quote short passages without asking \
    permission. Courts weigh the purpose of the use and the effect on the market for the \
    original. Understanding copyright helps creators license their work and avoid infringement \
    claims.";

#[test]
fn single_line_transcript_about_copyright_is_summarized() {
    assert!(!COPYRIGHT_TRANSCRIPT.contains('\n'));
    let normalized = TextNormalizer::with_defaults().normalize(COPYRIGHT_TRANSCRIPT);
    assert_eq!(normalized, COPYRIGHT_TRANSCRIPT);

    let record = summarize(COPYRIGHT_TRANSCRIPT, &SummaryOptions::default()).unwrap();
    assert!(!record.key_points.is_empty());
    assert!(record.key_points.iter().any(|k| k.text.contains("Fair use")));
}

#[test]
fn caption_led_transcript_keeps_body() {
    let text = format!(
        "Table 2: results are shown below. {}",
        COPYRIGHT_TRANSCRIPT.replace("copyright", "patent").replace("Copyright", "Patent")
    );
    let normalized = TextNormalizer::with_defaults().normalize(&text);
    assert!(normalized.starts_with("Today we are talking about patent law"));

    let record = summarize(&text, &SummaryOptions::default()).unwrap();
    assert!(!record.key_points.is_empty());
    assert!(record.key_points.iter().all(|k| !k.text.starts_with("Table 2")));
}

#[test]
fn insufficient_content_is_distinct_from_empty() {
    let result = summarize("A short note about cells.", &SummaryOptions::default());
    assert!(matches!(
        result,
        Err(SummaryError::InsufficientContent { length: 25, .. })
    ));
}

#[test]
fn lecture_notes_end_to_end() {
    let document = Document::from_text(LECTURE).with_file_name("cells.pdf");
    let record = summarize_document(&document, &SummaryConfig::default()).unwrap();

    assert_eq!(record.title, "Cell biology studies the structure and function of cells.");
    assert!(!record.formatted_summary.contains("Copyright"));
    assert!(!record.formatted_summary.contains("Figure 2"));
    assert!(record.formatted_summary.starts_with("Main Topics: "));
    assert!(record.formatted_summary.ends_with(DISCLAIMER));
    assert!(record.topics.len() <= 10);
    assert!(record
        .key_points
        .windows(2)
        .all(|w| w[0].position < w[1].position));
    assert!(record.key_points.iter().all(|k| k.page.is_none()));
}

#[test]
fn paged_document_tags_pages_in_order() {
    let pages: Vec<String> = TOPIC_WORDS
        .chunks(10)
        .map(|chunk| {
            chunk
                .iter()
                .map(|t| topic_sentence(t))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let document = Document::from_pages(pages).with_title("Field Notes");
    let config = Preset::Transcript.config().with_max_key_points(8);
    let record = summarize_document(&document, &config).unwrap();

    assert_eq!(record.title, "Field Notes");
    assert_eq!(record.metadata.page_count, 4);
    let pages: Vec<usize> = record.key_points.iter().map(|k| k.page.unwrap()).collect();
    assert!(pages.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn batch_matches_sequential_results() {
    let documents = vec![
        Document::from_text(LECTURE),
        Document::from_text(""),
        Document::from_text(long_document()),
    ];
    let config = SummaryConfig::default().with_sentence_bounds(20, 300);

    let batch = summarize_batch(&documents, &config);
    assert_eq!(batch.len(), 3);
    assert!(matches!(batch[1], Err(SummaryError::EmptyInput)));

    for (document, result) in documents.iter().zip(&batch) {
        if let Ok(record) = result {
            let sequential = summarize_document(document, &config).unwrap();
            assert_eq!(record, &sequential);
        }
    }
}

#[test]
fn batch_with_invalid_config_fails_every_document() {
    let documents = vec![Document::from_text(LECTURE), Document::from_text(LECTURE)];
    let config = SummaryConfig::default().with_max_key_points(0);

    let batch = summarize_batch(&documents, &config);
    assert!(batch
        .iter()
        .all(|r| matches!(r, Err(SummaryError::InvalidConfig(m)) if m.contains("max_key_points"))));
}

#[test]
fn caller_fallback_on_content_error() {
    let document = Document::from_text("Too little.").with_file_name("memo.txt");
    let record = match summarize_document(&document, &SummaryConfig::default()) {
        Ok(record) => record,
        Err(err) if err.is_content_error() => fallback_summary(&document, &err),
        Err(err) => panic!("unexpected error: {err}"),
    };

    assert_eq!(record.key_points.len(), 2);
    assert!(record.key_points[0].text.contains("too little text"));
}

#[test]
fn record_json_shape() {
    let record = summarize(LECTURE, &SummaryOptions::default()).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert!(json["title"].is_string());
    assert!(json["keyPoints"].is_array());
    assert!(json["keyPoints"][0]["text"].is_string());
    assert!(json["topics"].is_array());
    assert!(json["formattedSummary"].is_string());
    assert_eq!(json["wordCount"], record.word_count);
}
