use std::path::Path;
use std::process::Command;

const MANDEL: &str = env!("CARGO_BIN_EXE_mandel");
const MANDELMOVIE: &str = env!("CARGO_BIN_EXE_mandelmovie");

fn render(out: &Path, extra: &[&str]) -> std::process::ExitStatus {
    Command::new(MANDEL)
        .args(["-W", "40", "-H", "30", "-m", "100"])
        .args(extra)
        .arg("-o")
        .arg(out)
        .status()
        .unwrap()
}

fn ppm_body(path: &Path) -> Vec<u8> {
    let bytes = std::fs::read(path).unwrap();
    let header = b"P6\n40 30\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    bytes[header.len()..].to_vec()
}

#[test]
fn cli_renders_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.ppm");

    assert!(render(&out, &[]).success());

    assert_eq!(ppm_body(&out).len(), 40 * 30 * 3);
}

#[test]
fn cli_output_does_not_depend_on_threads_or_backend() {
    let dir = tempfile::tempdir().unwrap();
    let single = dir.path().join("single.ppm");
    assert!(render(&single, &["-t", "1"]).success());
    let reference = ppm_body(&single);

    for (name, args) in [
        ("four.ppm", ["-t", "4", "--backend", "threads"]),
        ("seven.ppm", ["-t", "7", "--backend", "threads"]),
        ("rayon.ppm", ["-t", "4", "--backend", "rayon"]),
    ] {
        let out = dir.path().join(name);
        assert!(render(&out, &args).success());
        assert_eq!(ppm_body(&out), reference, "{name} differs");
    }
}

#[test]
fn cli_writes_png_and_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("out.png");
    let jpg = dir.path().join("out.jpg");

    assert!(render(&png, &["-t", "2"]).success());
    assert!(render(&jpg, &["-t", "2"]).success());

    assert_eq!(&std::fs::read(&png).unwrap()[1..4], b"PNG");
    assert_eq!(&std::fs::read(&jpg).unwrap()[..2], &[0xFF, 0xD8]);
}

#[test]
fn cli_rejects_out_of_range_threads() {
    let dir = tempfile::tempdir().unwrap();

    for threads in ["0", "21"] {
        let out = dir.path().join(format!("t{threads}.ppm"));
        let status = render(&out, &["-t", threads]);

        assert!(!status.success());
        assert!(!out.exists());
    }
}

#[test]
fn cli_rejects_zero_iterations() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.ppm");

    let status = render(&out, &["-m", "0"]);

    assert!(!status.success());
    assert!(!out.exists());
}

#[test]
fn cli_rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.gif");

    assert!(!render(&out, &[]).success());
    assert!(!out.exists());
}

#[test]
fn movie_renders_every_frame_through_subprocesses() {
    let dir = tempfile::tempdir().unwrap();
    let frames = dir.path().join("frames");

    let status = Command::new(MANDELMOVIE)
        .args(["-p", "3", "--frames", "5", "--format", "ppm"])
        .args(["-W", "32", "-H", "24", "-m", "50", "-t", "2"])
        .arg("--renderer")
        .arg(MANDEL)
        .arg("--out-dir")
        .arg(&frames)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    for i in 0..5 {
        assert!(frames.join(format!("mandel{i:02}.ppm")).is_file());
    }
}

#[test]
fn movie_reports_total_failure_when_every_frame_fails() {
    let dir = tempfile::tempdir().unwrap();

    let status = Command::new(MANDELMOVIE)
        .args(["-p", "2", "--frames", "3", "--format", "ppm", "-W", "16", "-H", "16"])
        // mandelmovie rejects the renderer flags, so every job exits non-zero.
        .args(["--renderer", MANDELMOVIE])
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(3));
}

#[test]
fn movie_rejects_zero_processes() {
    let dir = tempfile::tempdir().unwrap();

    let status = Command::new(MANDELMOVIE)
        .args(["-p", "0", "--in-process"])
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn movie_missing_renderer_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let status = Command::new(MANDELMOVIE)
        .args(["--frames", "2", "-W", "8", "-H", "8"])
        .arg("--renderer")
        .arg(dir.path().join("missing"))
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn movie_bad_arguments_are_fatal_not_partial() {
    let dir = tempfile::tempdir().unwrap();

    for processes in ["-1", "abc"] {
        let status = Command::new(MANDELMOVIE)
            .args(["-p", processes, "--in-process"])
            .arg("--out-dir")
            .arg(dir.path())
            .status()
            .unwrap();

        assert_eq!(status.code(), Some(1), "-p {processes}");
    }
}

#[test]
fn movie_help_exits_cleanly() {
    let output = Command::new(MANDELMOVIE).arg("--help").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--frames"));
}
