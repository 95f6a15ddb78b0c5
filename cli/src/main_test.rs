use super::*;

#[test]
fn defaults_point_at_svg_directory() {
    let cli = Cli::try_parse_from(["create-sprite"]).expect("parse");
    assert_eq!(cli.input_dir, PathBuf::from("./svg"));
    assert_eq!(cli.output_path(), PathBuf::from("./svg").join("icons.svg"));
    assert!(!cli.stdout);
}

#[test]
fn explicit_output_overrides_default() {
    let cli = Cli::try_parse_from(["create-sprite", "--input-dir", "assets/icons", "--output", "dist/sprite.svg"])
        .expect("parse");
    assert_eq!(cli.input_dir, PathBuf::from("assets/icons"));
    assert_eq!(cli.output_path(), PathBuf::from("dist/sprite.svg"));
}

#[test]
fn run_writes_sprite_next_to_icons() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("close.svg"), "<svg viewBox=\"0 0 16 16\"><path/></svg>").expect("icon");
    let input = dir.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["create-sprite", "--input-dir", input.as_str()]).expect("parse");

    run(&cli).expect("run");
    // Second run must not fold the previous sprite back in.
    run(&cli).expect("rerun");

    let written = std::fs::read_to_string(dir.path().join("icons.svg")).expect("sprite");
    assert_eq!(written.matches("<symbol").count(), 1);
    assert!(written.contains("id=\"close-icon\""));
}

#[test]
fn run_with_custom_output_leaves_stale_default_sprite_out() {
    let icons = tempfile::tempdir().expect("tempdir");
    let dist = tempfile::tempdir().expect("tempdir");
    std::fs::write(icons.path().join("close.svg"), "<svg viewBox=\"0 0 16 16\"><path/></svg>").expect("icon");
    std::fs::write(icons.path().join("icons.svg"), "<svg><symbol id=\"stale-icon\"/></svg>").expect("stale sprite");
    let input = icons.path().to_string_lossy().into_owned();
    let output = dist.path().join("sprite.svg").to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["create-sprite", "--input-dir", input.as_str(), "--output", output.as_str()])
        .expect("parse");

    run(&cli).expect("run");

    let written = std::fs::read_to_string(dist.path().join("sprite.svg")).expect("sprite");
    assert_eq!(written.matches("<symbol").count(), 1);
    assert!(!written.contains("icons-icon"));
}
