//! End-to-end scenarios: description text in, numbered verdicts out.

use acceptor::description::{append_inputs, parse_description, read_description, Snapshot};
use acceptor::{
    AcceptorConfig, AutomatonModel, BatchReport, BuildError, Evaluator, Rejection, StateId,
    ValidationPolicy, Verdict, Violation,
};
use std::fs;
use tempfile::TempDir;

const EVEN_ONES: &str = "\
2
2 0 1
0
1 0
4
0 0 0
0 1 1
1 0 1
1 1 0

-
1
11
101
111
1001
1a01
";

fn report_for(text: &str) -> Vec<String> {
    let file = parse_description(text).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();
    BatchReport::evaluate(&Evaluator::new(), &model, &file.inputs)
        .lines()
        .collect()
}

#[test]
fn even_ones_file_produces_numbered_report() {
    assert_eq!(
        report_for(EVEN_ONES),
        vec![
            "1. rejects",
            "2. accepts",
            "3. accepts",
            "4. rejects",
            "5. accepts",
            "6. rejects",
        ]
    );
}

#[test]
fn partial_automaton_rejects_undefined_transition() {
    let text = "1\n1 x\n0\n1 0\n0\nx\nxx\n";
    assert_eq!(report_for(text), vec!["1. rejects", "2. rejects"]);

    let file = parse_description(text).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();
    assert_eq!(Evaluator::new().evaluate(&model, ""), Verdict::Accept);
    assert_eq!(
        Evaluator::new().trace(&model, "x").rejection(),
        Some(&Rejection::Stuck {
            position: 0,
            state: StateId::new(0),
            symbol: 'x'
        })
    );
}

#[test]
fn empty_accepting_set_rejects_everything() {
    let text = "1\n1 a\n0\n0\n1\n0 a 0\na\naaaa\n";
    assert_eq!(report_for(text), vec!["1. rejects", "2. rejects"]);
}

#[test]
fn malformed_file_lists_all_violations() {
    let text = "2\n1 a\n0\n1 3\n2\n0 b 1\n0 a 4\n";
    let file = parse_description(text).unwrap();

    let err = AutomatonModel::construct(&file.description).unwrap_err();
    let violations = err.violations();

    assert_eq!(violations.len(), 3);
    assert!(violations.contains(&Violation::SymbolNotInAlphabet {
        from: StateId::new(0),
        symbol: 'b'
    }));
    assert!(matches!(err, BuildError::Malformed(_)));

    // Lenient loading keeps the out-of-range ids but still rejects 'b'.
    let lenient = AutomatonModel::construct_with(&file.description, ValidationPolicy::Lenient)
        .unwrap_err();
    assert_eq!(lenient.violations().len(), 1);
}

#[test]
fn appended_strings_are_evaluated_on_next_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entrada.txt");
    fs::write(&path, EVEN_ONES).unwrap();

    append_inputs(&path, ["0000", "010"]).unwrap();

    let file = read_description(&path, &AcceptorConfig::default()).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();
    let report = BatchReport::evaluate(&Evaluator::new(), &model, &file.inputs);

    assert_eq!(report.entries.len(), 8);
    assert_eq!(report.entries[6].input, "0000");
    assert_eq!(report.entries[6].verdict, Verdict::Accept);
    assert_eq!(report.entries[7].verdict, Verdict::Reject);
}

#[test]
fn report_file_matches_console_lines() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("saida.txt");

    let file = parse_description(EVEN_ONES).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();
    let report = BatchReport::evaluate(&Evaluator::new(), &model, &file.inputs);
    report
        .write_to(fs::File::create(&out_path).unwrap())
        .unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let expected: Vec<String> = report.lines().collect();
    assert_eq!(written.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn snapshot_of_parsed_file_evaluates_identically() {
    let file = parse_description(EVEN_ONES).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();

    let json = Snapshot::of(&model).to_json().unwrap();
    let restored = Snapshot::from_json(&json)
        .unwrap()
        .restore(ValidationPolicy::Strict)
        .unwrap();

    let evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate_batch(&model, &file.inputs),
        evaluator.evaluate_batch(&restored, &file.inputs)
    );
}

#[test]
fn model_is_shared_across_threads() {
    let file = parse_description(EVEN_ONES).unwrap();
    let model = AutomatonModel::construct(&file.description).unwrap();
    let expected = Evaluator::new().evaluate_batch(&model, &file.inputs);

    let results: Vec<Vec<Verdict>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Evaluator::new().evaluate_batch(&model, &file.inputs)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for verdicts in results {
        assert_eq!(verdicts, expected);
    }
}
