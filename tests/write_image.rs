use mbrgen::{encode_protective_mbr, write_protective_mbr};

#[test]
fn written_image_starts_with_the_canonical_sector() {
    let path = std::env::temp_dir().join("mbrgen_write.img");
    let path = path.to_str().unwrap();

    write_protective_mbr(path).unwrap();

    let data = std::fs::read(path).unwrap();
    assert!(data.len() >= 512);
    assert_eq!(&data[..512], &encode_protective_mbr()[..]);

    std::fs::remove_file(path).ok();
}

#[test]
fn rewriting_replaces_previous_content() {
    let path = std::env::temp_dir().join("mbrgen_rewrite.img");
    let path = path.to_str().unwrap();

    std::fs::write(path, vec![0xFFu8; 4096]).unwrap();
    write_protective_mbr(path).unwrap();

    let data = std::fs::read(path).unwrap();
    assert_eq!(data.len(), 512);
    assert_eq!(&data[..], &encode_protective_mbr()[..]);

    std::fs::remove_file(path).ok();
}

#[test]
fn unwritable_path_reports_the_path() {
    let path = std::env::temp_dir()
        .join("mbrgen_missing_dir")
        .join("out.img");
    let path = path.to_str().unwrap();

    let err = write_protective_mbr(path).unwrap_err();

    assert!(err.contains(path));
    assert!(err.contains("Failed to open"));
}
