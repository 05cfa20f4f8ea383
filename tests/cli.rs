//! End-to-end runs of the assembler binary on small read files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::{tempdir, TempDir};

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rust-dbgasm"))
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Runs the assembler, returns (stdout, stderr, success)
fn run(args: &[&str], input: &Path) -> (String, String, bool) {
    let output = Command::new(binary())
        .arg("-q")
        .args(args)
        .arg(input)
        .output()
        .expect("failed to execute rust-dbgasm");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn genome_line(stdout: &str) -> String {
    let mut lines = stdout.lines();
    lines.find(|l| l.starts_with("Genome :"));
    lines.next().unwrap_or("").trim().to_string()
}

#[test]
fn single_reads_circuit() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "single.txt", "4\nACGT\nCGTA\nGTAC\nTACG\n");

    let (stdout, stderr, success) = run(&["-m", "0"], &input);

    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("Debruijn Graph : \nACG -> CGT\nCGT -> GTA\nGTA -> TAC\nTAC -> ACG\n"));
    assert!(stdout.contains(" -> ACG -> CGT -> GTA -> TAC -> ACG"));
    assert_eq!(genome_line(&stdout), "ACGTACG");
}

#[test]
fn read_pairs_with_outputs() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "pairs.txt",
        "3 1\nACG|TGC\nCGT|GCA\nGTT|CAT\nTTG|ATG\nTGC|TGC\nGCA|GCC\n",
    );
    let prefix = dir.path().join("out");

    let (stdout, stderr, success) =
        run(&["--mode", "1", "-p", prefix.to_str().unwrap(), "--graphml"], &input);

    assert!(success, "stderr: {}", stderr);
    assert_eq!(genome_line(&stdout), "ACGTTGCATGCC");
    assert!(stdout.contains("Genome :\n ACGTTGCATGCC\n"));
    assert!(stdout.contains("Prefix :\n ACGTTGCA\n"));
    assert!(stdout.contains("Suffix :\n TGCATGCC\n"));

    let fasta = fs::read_to_string(dir.path().join("out.fa")).unwrap();
    assert!(fasta.starts_with(">genome\nACGTTGCATGCC\n"));
    let gfa = fs::read_to_string(dir.path().join("out.gfa")).unwrap();
    assert!(gfa.contains("S\t0\t*\tLB:Z:AC|TG"));
    assert_eq!(gfa.lines().filter(|l| l.starts_with('L')).count(), 6);
    assert!(dir.path().join("out.graphml").exists());
}

#[test]
fn single_pair_reports_both_halves() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "one_pair.txt", "3 1\nACG|TGA\n");
    let prefix = dir.path().join("one");

    let (stdout, stderr, success) = run(&["-m", "1", "-p", prefix.to_str().unwrap()], &input);

    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("AC|TG -> CG|GA"));
    assert_eq!(genome_line(&stdout), "");
    assert!(stdout.contains("Prefix :\n ACG\n"));
    assert!(stdout.contains("Suffix :\n TGA\n"));
    assert!(stderr.contains("does not span the gap"), "stderr: {}", stderr);
    let fasta = fs::read_to_string(dir.path().join("one.fa")).unwrap();
    assert!(!fasta.contains(">genome"));
}

#[test]
fn hierholzer_recovers_edges_the_greedy_walk_strands() {
    let dir = tempdir().unwrap();
    let text = "TAATGCCATGGGATGTT";
    let reads: Vec<&str> = (0..=text.len() - 3).map(|i| &text[i..i + 3]).collect();
    let input = write_input(&dir, "branching.txt", &format!("3\n{}\n", reads.join("\n")));

    let (greedy, _, success) = run(&["-m", "0"], &input);
    assert!(success);
    assert!(genome_line(&greedy).len() < text.len());

    let (full, stderr, success) = run(&["-m", "0", "--hierholzer"], &input);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(genome_line(&full).len(), text.len());
}

#[test]
fn malformed_read_fails_with_line_number() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "bad.txt", "4\nACGT\nCGT\n");

    let (_, stderr, success) = run(&["-m", "0"], &input);

    assert!(!success);
    assert!(stderr.contains("malformed read on line 3"), "stderr: {}", stderr);
}

#[test]
fn non_integer_header_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "bad_header.txt", "k\nACGT\n");

    let (_, stderr, success) = run(&["-m", "0"], &input);

    assert!(!success);
    assert!(stderr.contains("invalid header line"), "stderr: {}", stderr);
}

#[test]
fn mode_is_prompted_when_missing() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "single.txt", "3\nGAT\nATT\nTTC\n");

    let mut child = Command::new(binary())
        .arg("-q")
        .arg(&input)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to execute rust-dbgasm");
    child.stdin.take().unwrap().write_all(b"0\n").unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("For Single Reads type 0"));
    assert_eq!(genome_line(&stdout), "GATTC");
}

#[test]
fn unknown_mode_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "single.txt", "3\nGAT\n");

    let (_, _, success) = run(&["-m", "2"], &input);

    assert!(!success);
}
