use super::*;

#[test]
fn normalize_rel_path_cleans_separators() {
    assert_eq!(normalize_rel_path("a/b.mp3").unwrap(), "a/b.mp3");
    assert_eq!(normalize_rel_path("./a//b.mp3").unwrap(), "a/b.mp3");
    assert_eq!(normalize_rel_path("a\\b.mp3").unwrap(), "a/b.mp3");
}

#[test]
fn normalize_rel_path_rejects_escapes() {
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.mp3").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn asset_ref_serde_normalizes() {
    let r: AssetRef = serde_json::from_str("\"./audio//voiceover.mp3\"").unwrap();
    assert_eq!(r.as_str(), "audio/voiceover.mp3");
    assert_eq!(serde_json::to_string(&r).unwrap(), "\"audio/voiceover.mp3\"");
    assert!(serde_json::from_str::<AssetRef>("\"../x\"").is_err());
}

#[test]
fn static_dir_resolves_and_reads() {
    let root = std::env::temp_dir().join(format!("tidereel_static_{}", std::process::id()));
    std::fs::create_dir_all(root.join("audio")).unwrap();
    std::fs::write(root.join("audio").join("a.bin"), [1u8, 2, 3]).unwrap();

    let dir = StaticDir::new(&root);
    let r = AssetRef::new("audio/a.bin").unwrap();
    assert!(dir.resolve(&r).unwrap().ends_with("a.bin"));
    assert_eq!(dir.read_bytes(&r).unwrap(), vec![1, 2, 3]);

    let missing = AssetRef::new("audio/missing.bin").unwrap();
    let err = dir.resolve(&missing).unwrap_err();
    assert!(err.to_string().starts_with("asset error:"));

    std::fs::remove_dir_all(&root).unwrap();
}
