// tests/config_load.rs
use ghostwriter_humanizer::config::{load_default, load_from_file, ENV_CONFIG_PATH, ENV_INTENSITY};
use ghostwriter_humanizer::{HumanizationConfig, LogicStyle, RhythmPattern};
use std::{env, fs};

#[test]
fn parse_toml_and_json_files() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("humanize.toml");
    fs::write(
        &p_toml,
        r#"
intensity = 140
logicStyle = "storytelling"
verbalTics = [" 我跟你講 ", "", "我跟你講"]
"#,
    )
    .unwrap();
    let c = load_from_file(&p_toml).unwrap();
    assert_eq!(c.intensity, 100);
    assert_eq!(c.logic_style, LogicStyle::Storytelling);
    assert_eq!(c.verbal_tics, vec!["我跟你講".to_string()]);
    // untouched fields keep defaults
    assert_eq!(c.rhythm_pattern, RhythmPattern::Varied);

    let p_json = dir.path().join("humanize.json");
    fs::write(
        &p_json,
        r#"{"rhythmPattern":"zigzag","removeAIPhrases":false,"intensity":-5}"#,
    )
    .unwrap();
    let j = load_from_file(&p_json).unwrap();
    assert_eq!(j.rhythm_pattern, RhythmPattern::Uniform);
    assert!(!j.remove_ai_phrases);
    assert_eq!(j.intensity, 0);
}

#[test]
fn broken_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("humanize.toml");
    fs::write(&p, "intensity = [").unwrap();
    let err = load_from_file(&p).unwrap_err();
    assert!(format!("{err:#}").contains("humanize.toml"));
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // isolate CWD so the repo's config/ is not read
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_INTENSITY);

    // 1) nothing on disk -> defaults
    assert_eq!(load_default().unwrap(), HumanizationConfig::default());

    // 2) JSON fallback in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("humanize.json"), r#"{"intensity": 20}"#).unwrap();
    assert_eq!(load_default().unwrap().intensity, 20);

    // 3) TOML wins over JSON
    fs::write(cfg_dir.join("humanize.toml"), "intensity = 30").unwrap();
    assert_eq!(load_default().unwrap().intensity, 30);

    // 4) env path wins over both
    let p_env = tmp.path().join("custom.json");
    fs::write(&p_env, r#"{"intensity": 40}"#).unwrap();
    env::set_var(ENV_CONFIG_PATH, p_env.display().to_string());
    assert_eq!(load_default().unwrap().intensity, 40);

    // 5) intensity override applies last
    env::set_var(ENV_INTENSITY, "85");
    assert_eq!(load_default().unwrap().intensity, 85);

    // 6) dangling env path is an error
    env::set_var(ENV_CONFIG_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(load_default().is_err());

    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_INTENSITY);
    env::set_current_dir(&old).unwrap();
}
