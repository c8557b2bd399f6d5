//! Loads named grammars and their expected answers from a JSON fixture and
//! checks both recognisers agree with every recorded result.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use grammarcheck::facade::{Facade, NaiveGrammar, NaiveRule};
use grammarcheck::{CykRecognizer, EarleyRecognizer};

#[derive(Deserialize)]
struct FixtureRule {
    left: char,
    right: String,
}

#[derive(Deserialize)]
struct FixtureGrammar {
    non_terminals: String,
    terminals: String,
    start: char,
    rules: Vec<FixtureRule>,
}

#[derive(Deserialize)]
struct FixtureCase {
    word: String,
    result: bool,
}

#[derive(Deserialize)]
struct Fixture {
    grammar: FixtureGrammar,
    #[allow(dead_code)]
    grammar_class: Option<String>,
    tests: Vec<FixtureCase>,
}

fn load_fixtures() -> HashMap<String, Fixture> {
    let raw = include_str!("fixtures/grammars.json");
    serde_json::from_str(raw).expect("fixtures/grammars.json must parse")
}

fn to_naive(grammar: &FixtureGrammar) -> NaiveGrammar {
    NaiveGrammar {
        non_terminals: grammar.non_terminals.chars().collect::<HashSet<_>>(),
        terminals: grammar.terminals.chars().collect::<HashSet<_>>(),
        start: grammar.start,
        rules: grammar
            .rules
            .iter()
            .map(|r| NaiveRule::new(r.left, r.right.clone()))
            .collect(),
    }
}

#[test]
fn every_fixture_agrees_on_both_recognisers() {
    for (name, fixture) in load_fixtures() {
        let naive = to_naive(&fixture.grammar);

        let mut earley = Facade::new(EarleyRecognizer::new());
        earley.fit(&naive).unwrap_or_else(|e| panic!("{name}: earley fit failed: {e}"));

        let mut cyk = Facade::new(CykRecognizer::new());
        cyk.fit(&naive).unwrap_or_else(|e| panic!("{name}: cyk fit failed: {e}"));

        for case in &fixture.tests {
            let earley_answer = earley
                .predict(&case.word)
                .unwrap_or_else(|e| panic!("{name}/{:?}: earley predict failed: {e}", case.word));
            let cyk_answer = cyk
                .predict(&case.word)
                .unwrap_or_else(|e| panic!("{name}/{:?}: cyk predict failed: {e}", case.word));

            assert_eq!(
                earley_answer, case.result,
                "{name}: earley disagreed with the fixture on {:?}",
                case.word
            );
            assert_eq!(
                cyk_answer, case.result,
                "{name}: cyk disagreed with the fixture on {:?}",
                case.word
            );
        }
    }
}
