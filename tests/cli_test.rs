use masic::lang::ErrorCode;
use masic::term::{run, Args, Failure};
use std::fs;

fn args(input: &std::path::Path, output: Option<&std::path::Path>) -> Args {
    Args {
        input: input.to_path_buf(),
        output: output.map(|p| p.to_path_buf()),
    }
}

#[test]
fn test_writes_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.bas");
    fs::write(&input, "10 PRINT \"HELLO\"\n20 END\n").unwrap();
    let mut stdout: Vec<u8> = vec![];
    let stats = run(&args(&input, None), &mut stdout).unwrap();
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        ":include \"BasicLib.fs\"\n: main \n: line10 \"HELLO\" prints cr \n: line20 halt \nhalt"
    );
    assert_eq!(stats.lines, 2);
}

#[test]
fn test_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.bas");
    let output = dir.path().join("prog.fs");
    fs::write(&input, "10 LET A = 1\n").unwrap();
    let mut stdout: Vec<u8> = vec![];
    run(&args(&input, Some(&output)), &mut stdout).unwrap();
    assert!(stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        masic::compile("10 LET A = 1\n").unwrap()
    );
}

#[test]
fn test_error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.bas");
    let output = dir.path().join("bad.fs");
    fs::write(&input, "10 PRINT 1\n20 FOO\n").unwrap();
    let mut stdout: Vec<u8> = vec![];
    match run(&args(&input, Some(&output)), &mut stdout) {
        Err(Failure::Compile(e)) => assert_eq!(e.code(), ErrorCode::UnknownStatement),
        other => panic!("{:?}", other),
    }
    assert!(!output.exists());
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.bas");
    let mut stdout: Vec<u8> = vec![];
    match run(&args(&input, None), &mut stdout) {
        Err(Failure::Read(path, _)) => assert_eq!(path, input),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_output_file_replaced_whole() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.bas");
    let output = dir.path().join("prog.fs");
    fs::write(&input, "10 END\n").unwrap();
    fs::write(&output, "stale contents that are longer than the new output").unwrap();
    let mut stdout: Vec<u8> = vec![];
    run(&args(&input, Some(&output)), &mut stdout).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        masic::compile("10 END\n").unwrap()
    );
    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["prog.bas", "prog.fs"]);
}

#[test]
fn test_unwritable_destination_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.bas");
    let output = dir.path().join("missing").join("prog.fs");
    fs::write(&input, "10 END\n").unwrap();
    let mut stdout: Vec<u8> = vec![];
    match run(&args(&input, Some(&output)), &mut stdout) {
        Err(Failure::Write(Some(path), _)) => assert_eq!(path, output),
        other => panic!("{:?}", other),
    }
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
