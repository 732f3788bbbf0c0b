// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Startup training path: split, fit, score and mapping validation

use ai_tools_server::bootstrap::fit_article_classifier;
use ai_tools_server::text::{Corpus, TextError};

fn corpus(categories: &[&str]) -> Corpus {
    let topics: [(&str, [&str; 6]); 5] = [
        (
            "comp.graphics",
            ["opengl", "shaders", "rendering", "polygons", "texture", "jpeg"],
        ),
        (
            "rec.sport.baseball",
            ["pitcher", "inning", "strikeout", "homerun", "batting", "shortstop"],
        ),
        (
            "sci.space",
            ["shuttle", "orbit", "nasa", "satellite", "rocket", "launch"],
        ),
        (
            "talk.politics.mideast",
            ["israel", "lebanon", "peace", "arab", "palestinian", "treaty"],
        ),
        (
            "alt.atheism",
            ["god", "belief", "religion", "atheist", "faith", "bible"],
        ),
    ];

    let mut target_names: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
    target_names.sort();

    let mut corpus = Corpus {
        target_names,
        ..Default::default()
    };
    for (target, name) in corpus.target_names.clone().iter().enumerate() {
        let (_, words) = topics.iter().find(|(topic, _)| *topic == name.as_str()).unwrap();
        // Ten documents per category, each a rotation of the topic words
        for i in 0..10 {
            let document: Vec<&str> = words.iter().cycle().skip(i).take(4).copied().collect();
            corpus.documents.push(document.join(" "));
            corpus.targets.push(target);
        }
    }
    corpus
}

const SERVED: [&str; 4] = [
    "sci.space",
    "rec.sport.baseball",
    "talk.politics.mideast",
    "comp.graphics",
];

#[test]
fn test_fit_on_served_categories() {
    let classifier = fit_article_classifier(&corpus(&SERVED), 0.25, 42).unwrap();

    let predictions = classifier
        .classify(&[
            "the rocket will launch into orbit".to_string(),
            "a strikeout in the last inning".to_string(),
        ])
        .unwrap();
    assert_eq!(
        predictions,
        vec!["Science - Space", "Recreational Sports - Baseball"]
    );

    let corpus = corpus(&SERVED);
    assert_eq!(classifier.pipeline().score(&corpus.documents, &corpus.targets), 1.0);
}

#[test]
fn test_fit_is_deterministic_for_a_seed() {
    let texts = vec!["peace treaty".to_string(), "opengl texture".to_string()];
    let first = fit_article_classifier(&corpus(&SERVED), 0.25, 7).unwrap();
    let second = fit_article_classifier(&corpus(&SERVED), 0.25, 7).unwrap();
    assert_eq!(first.classify(&texts).unwrap(), second.classify(&texts).unwrap());
}

#[test]
fn test_unmapped_category_rejected_at_startup() {
    let categories = [
        "sci.space",
        "rec.sport.baseball",
        "talk.politics.mideast",
        "alt.atheism",
    ];
    let result = fit_article_classifier(&corpus(&categories), 0.25, 42);
    assert!(matches!(result, Err(TextError::MappingMismatch { .. })));
}

#[test]
fn test_invalid_test_size_rejected() {
    let result = fit_article_classifier(&corpus(&SERVED), 1.5, 42);
    assert!(matches!(result, Err(TextError::InvalidSplit(_))));
}
