use super::*;

use std::collections::BTreeMap;
use std::fs::write;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{ImageFormat, Rgb, RgbImage};

use crate::core::types::MediaTime;

/// Canned groups and duration; counts duration requests.
#[derive(Debug, Default)]
struct FakeMedia {
    groups: Vec<MetadataGroup>,
    duration: Option<MediaTime>,
    duration_calls: AtomicUsize,
}

impl MediaProvider for FakeMedia {
    fn metadata_groups(&self, _path: &Path) -> Result<Vec<MetadataGroup>> {
        Ok(self.groups.clone())
    }

    fn duration(&self, path: &Path) -> Result<MediaTime> {
        self.duration_calls.fetch_add(1, Ordering::SeqCst);
        self.duration.ok_or_else(|| InfoError::NoDuration {
            path: path.to_path_buf(),
        })
    }
}

/// Always fails to read tags.
#[derive(Debug)]
struct BrokenMedia;

impl MediaProvider for BrokenMedia {
    fn metadata_groups(&self, path: &Path) -> Result<Vec<MetadataGroup>> {
        Err(InfoError::Media {
            path: path.to_path_buf(),
            message: "unreadable".into(),
        })
    }

    fn duration(&self, path: &Path) -> Result<MediaTime> {
        Err(InfoError::NoDuration {
            path: path.to_path_buf(),
        })
    }
}

fn text(key: CommonKey, value: &str) -> MetadataItem {
    MetadataItem {
        identifier: format!("{key:?}"),
        common_key: Some(key),
        value: MetadataValue::Text(value.to_string()),
    }
}

fn artwork(container: BTreeMap<String, MetadataValue>) -> MetadataItem {
    MetadataItem {
        identifier: "APIC".into(),
        common_key: Some(CommonKey::Artwork),
        value: MetadataValue::Map(container),
    }
}

fn group(items: Vec<MetadataItem>) -> MetadataGroup {
    MetadataGroup {
        format: "test".into(),
        items,
    }
}

fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb([0, 128, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}

/// Temp file whose first bytes are `prefix`.
fn file_with(prefix: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("track.mp3");
    write(&path, prefix).expect("write file");
    (tmp, path)
}

fn build(path: &Path, media: FakeMedia) -> (AudioFileInfo, Arc<FakeMedia>) {
    let media = Arc::new(media);
    let info = AudioFileInfo::with_providers(
        path,
        &FsAttributeProvider,
        media.clone(),
        &InfoOptions::default(),
    )
    .expect("best-effort never fails");
    (info, media)
}

#[test]
fn signature_check_cases() {
    let cases: &[(&[u8], bool)] = &[
        (b"ID3\x04\x00", true),
        (b"ID", true),
        (b"I", false),
        (b"", false),
        (b"DI3", false),
        (b"\xFF\xFB\x90", false),
        (b"id3", false),
    ];

    for (bytes, expected) in cases {
        let (_tmp, path) = file_with(bytes);
        assert_eq!(is_valid_mp3(&path), *expected, "prefix {bytes:?}");
    }
}

#[test]
fn signature_check_fails_for_missing_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    assert!(!is_valid_mp3(&tmp.path().join("missing.mp3")));
}

#[test]
fn last_item_wins_across_and_within_groups() {
    let (_tmp, path) = file_with(b"ID3");

    let media = FakeMedia {
        groups: vec![
            group(vec![
                text(CommonKey::Artist, "A"),
                text(CommonKey::Title, "T"),
            ]),
            group(vec![
                text(CommonKey::Title, "T2"),
                text(CommonKey::AlbumName, "First"),
                text(CommonKey::AlbumName, "Second"),
            ]),
        ],
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);

    assert_eq!(info.artist(), Some("A"));
    assert_eq!(info.title(), Some("T2"));
    assert_eq!(info.album(), Some("Second"));
}

#[test]
fn unkeyed_and_other_items_are_ignored() {
    let (_tmp, path) = file_with(b"ID3");

    let media = FakeMedia {
        groups: vec![group(vec![
            text(CommonKey::Title, "Kept"),
            text(CommonKey::Other("TCON".into()), "Jazz"),
            MetadataItem {
                identifier: "PRIV".into(),
                common_key: None,
                value: MetadataValue::Text("ignored".into()),
            },
            // wrong shape for a text key: skipped, not cleared
            MetadataItem {
                identifier: "TIT2".into(),
                common_key: Some(CommonKey::Title),
                value: MetadataValue::Data(vec![1, 2]),
            },
        ])],
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);

    assert_eq!(info.title(), Some("Kept"));
    assert_eq!(info.artist(), None);
    assert_eq!(info.album(), None);
}

#[test]
fn artwork_decodes_from_data_entry() {
    let (_tmp, path) = file_with(b"ID3");
    let png = png_bytes();

    let mut container = BTreeMap::new();
    container.insert(ARTWORK_DATA_KEY.to_string(), MetadataValue::Data(png.clone()));
    container.insert(
        ARTWORK_MIME_KEY.to_string(),
        MetadataValue::Text("image/png".into()),
    );

    let media = FakeMedia {
        groups: vec![group(vec![artwork(container)])],
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);
    let art = info.cover_art().expect("cover art");

    assert_eq!(art.dimensions(), (4, 4));
    assert_eq!(art.mime_type(), Some("image/png"));
    assert_eq!(art.data(), png.as_slice());
}

#[test]
fn malformed_artwork_is_skipped_without_clearing() {
    let (_tmp, path) = file_with(b"ID3");

    let mut good = BTreeMap::new();
    good.insert(ARTWORK_DATA_KEY.to_string(), MetadataValue::Data(png_bytes()));

    let mut missing_data = BTreeMap::new();
    missing_data.insert("other".to_string(), MetadataValue::Data(png_bytes()));

    let mut wrong_type = BTreeMap::new();
    wrong_type.insert(ARTWORK_DATA_KEY.to_string(), MetadataValue::Text("png".into()));

    let mut undecodable = BTreeMap::new();
    undecodable.insert(ARTWORK_DATA_KEY.to_string(), MetadataValue::Data(vec![0, 1, 2]));

    let media = FakeMedia {
        groups: vec![group(vec![
            artwork(good),
            artwork(missing_data),
            artwork(wrong_type),
            artwork(undecodable),
            MetadataItem {
                identifier: "APIC".into(),
                common_key: Some(CommonKey::Artwork),
                value: MetadataValue::Data(png_bytes()),
            },
            text(CommonKey::Title, "after artwork"),
        ])],
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);

    assert!(info.cover_art().is_some());
    assert_eq!(info.cover_art().map(CoverArt::mime_type), Some(None));
    assert_eq!(info.title(), Some("after artwork"));
}

#[test]
fn signature_mismatch_leaves_audio_fields_unset() {
    let (_tmp, path) = file_with(b"\xFF\xFB\x90\x00");

    let media = FakeMedia {
        groups: vec![group(vec![text(CommonKey::Title, "never read")])],
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);

    assert_eq!(info.title(), None);
    assert!(info.cover_art().is_none());
    // base fields still valid
    assert_eq!(info.size_bytes(), 4);
    assert_eq!(info.name(), "track.mp3");
}

#[test]
fn signature_mismatch_is_an_error_when_strict() {
    let (_tmp, path) = file_with(b"RIFF");

    let err = AudioFileInfo::with_providers(
        &path,
        &FsAttributeProvider,
        Arc::new(FakeMedia::default()),
        &InfoOptions::strict(),
    )
    .expect_err("strict should reject");

    assert!(matches!(err, InfoError::SignatureMismatch { .. }), "{err:?}");
}

#[test]
fn tag_read_failure_is_absorbed_unless_strict() {
    let (_tmp, path) = file_with(b"ID3");

    let info = AudioFileInfo::with_providers(
        &path,
        &FsAttributeProvider,
        Arc::new(BrokenMedia),
        &InfoOptions::default(),
    )
    .expect("best-effort");
    assert_eq!(info.title(), None);

    let err = AudioFileInfo::with_providers(
        &path,
        &FsAttributeProvider,
        Arc::new(BrokenMedia),
        &InfoOptions::strict(),
    )
    .expect_err("strict");
    assert!(matches!(err, InfoError::Media { .. }), "{err:?}");
}

#[test]
fn duration_truncates_and_is_recomputed_each_call() {
    let (_tmp, path) = file_with(b"ID3");

    let media = FakeMedia {
        duration: Some(MediaTime {
            value: 150,
            timescale: 50,
        }),
        ..FakeMedia::default()
    };

    let (info, media) = build(&path, media);

    assert_eq!(info.duration_seconds().expect("duration"), 3);
    assert_eq!(info.duration_seconds().expect("duration"), 3);
    assert_eq!(media.duration_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn zero_timescale_is_no_duration() {
    let (_tmp, path) = file_with(b"ID3");

    let media = FakeMedia {
        duration: Some(MediaTime {
            value: 150,
            timescale: 0,
        }),
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);
    assert!(matches!(
        info.duration_seconds(),
        Err(InfoError::NoDuration { .. })
    ));
}

#[test]
fn summary_appends_audio_fields() {
    let (_tmp, path) = file_with(b"ID3");

    let media = FakeMedia {
        groups: vec![group(vec![
            text(CommonKey::Title, "Song"),
            text(CommonKey::Artist, "Band"),
        ])],
        duration: Some(MediaTime {
            value: 90_000,
            timescale: 1000,
        }),
        ..FakeMedia::default()
    };

    let (info, _) = build(&path, media);
    let summary = info.to_string();

    assert!(summary.starts_with(&info.file().to_string()));
    assert!(summary.ends_with(
        "title: Song\nartist: Band\nalbum: -\ncover art: -\nduration: 90\n"
    ));
}
