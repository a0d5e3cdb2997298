use image::{ImageBuffer, Rgb};
use slidegen::{assemble_slides, SlideError};
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

fn write_png(path: &Path, color: [u8; 3]) {
    let img = ImageBuffer::from_fn(16, 9, |_, _| Rgb(color));
    img.save(path).expect("Failed to save test image");
}

fn read_entry(archive: &mut ZipArchive<fs::File>, name: &str) -> String {
    let mut entry = archive.by_name(name).expect("Missing archive entry");
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .expect("Failed to read archive entry");
    content
}

fn open_deck(path: &Path) -> ZipArchive<fs::File> {
    let file = fs::File::open(path).expect("Failed to open PPTX file");
    ZipArchive::new(file).expect("Failed to read PPTX as ZIP")
}

#[test]
fn test_assembles_three_pngs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir(&images).expect("Failed to create slides directory");
    for name in ["01.png", "02.png", "03.png"] {
        write_png(&images.join(name), [255, 0, 0]);
    }
    let output = temp_dir.path().join("deck.pptx");

    let result = assemble_slides(&images, &output).expect("Assembly failed");

    assert_eq!(result.slide_count, 3);
    assert!(result.bytes > 0);
    assert!(output.exists());
    assert_eq!(fs::metadata(&output).unwrap().len(), result.bytes);

    let mut archive = open_deck(&output);
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide3.xml",
        "ppt/media/image3.png",
    ] {
        assert!(archive.by_name(part).is_ok(), "Missing part {}", part);
    }

    let presentation = read_entry(&mut archive, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    assert_eq!(presentation.matches("<p:sldId ").count(), 3);
}

#[test]
fn test_slides_are_full_bleed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_png(&temp_dir.path().join("01.png"), [0, 0, 255]);
    let output = temp_dir.path().join("out").join("deck.pptx");

    assemble_slides(temp_dir.path(), &output).expect("Assembly failed");

    let mut archive = open_deck(&output);
    let slide = read_entry(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide.contains(r#"<a:off x="0" y="0"/><a:ext cx="12192000" cy="6858000"/>"#));
    assert!(slide.contains("<a:stretch><a:fillRect/></a:stretch>"));
    assert_eq!(slide.matches("<p:pic>").count(), 1);
}

#[test]
fn test_orders_slides_numerically() {
    for ext in ["png", "jpg", "jpeg", "webp"] {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let images = temp_dir.path().join("slides");
        fs::create_dir(&images).expect("Failed to create slides directory");

        // Distinct payloads so media order can be traced back to file names
        for name in ["10", "02", "01"] {
            fs::write(images.join(format!("{}.{}", name, ext)), name.as_bytes())
                .expect("Failed to write image");
        }
        let output = temp_dir.path().join("deck.pptx");

        let result = assemble_slides(&images, &output).expect("Assembly failed");
        assert_eq!(result.slide_count, 3);

        let mut archive = open_deck(&output);
        let order: Vec<String> = (1..=3)
            .map(|n| read_entry(&mut archive, &format!("ppt/media/image{}.{}", n, ext)))
            .collect();
        assert_eq!(order, vec!["01", "02", "10"], "wrong order for .{}", ext);
    }
}

#[test]
fn test_filters_non_image_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir(&images).expect("Failed to create slides directory");
    write_png(&images.join("01.png"), [0, 255, 0]);
    fs::write(images.join("02.JPG"), b"jpeg bytes").expect("Failed to write image");
    fs::write(images.join("notes.txt"), "some notes").expect("Failed to write notes");
    fs::write(images.join("data.json"), "{}").expect("Failed to write json");
    fs::write(images.join("anim.gif"), b"gif").expect("Failed to write gif");
    let output = temp_dir.path().join("deck.pptx");

    let result = assemble_slides(&images, &output).expect("Assembly failed");
    assert_eq!(result.slide_count, 2);

    let mut archive = open_deck(&output);
    let content_types = read_entry(&mut archive, "[Content_Types].xml");
    assert!(content_types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    assert!(content_types.contains(r#"<Default Extension="jpg" ContentType="image/jpeg"/>"#));
    assert!(archive.by_name("ppt/media/image2.jpg").is_ok());
}

#[test]
fn test_empty_directory_fails_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir(&images).expect("Failed to create slides directory");
    let output = temp_dir.path().join("deck.pptx");

    let err = assemble_slides(&images, &output).unwrap_err();
    assert!(matches!(err, SlideError::NoImagesFound(_)));
    assert!(err.to_string().starts_with("No image files found in"));
    assert!(!output.exists());
}

#[test]
fn test_non_image_directory_fails_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("readme.md"), "# hi").expect("Failed to write file");
    let output = temp_dir.path().join("deck.pptx");

    let err = assemble_slides(temp_dir.path(), &output).unwrap_err();
    assert!(err.to_string().contains("No image files found"));
    assert!(!output.exists());
}

#[test]
fn test_image_named_directories_are_not_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir_all(images.join("archive.png")).expect("Failed to create subdirectory");
    let output = temp_dir.path().join("deck.pptx");

    let err = assemble_slides(&images, &output).unwrap_err();
    assert!(matches!(err, SlideError::NoImagesFound(_)));
    assert!(!output.exists());
}

#[test]
fn test_missing_directory_propagates_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");

    let err = assemble_slides(&temp_dir.path().join("missing"), &output).unwrap_err();
    assert!(matches!(err, SlideError::Io(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_orders_punctuation_and_case_ties() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir(&images).expect("Failed to create slides directory");

    let names = ["01.png", "01_intro.png", "a.png", "A.png", "-1.png", "1.png"];
    for name in names {
        fs::write(images.join(name), name.as_bytes()).expect("Failed to write image");
    }
    let output = temp_dir.path().join("deck.pptx");

    let result = assemble_slides(&images, &output).expect("Assembly failed");
    assert_eq!(result.slide_count, names.len());

    let mut archive = open_deck(&output);
    let order: Vec<String> = (1..=names.len())
        .map(|n| read_entry(&mut archive, &format!("ppt/media/image{}.png", n)))
        .collect();
    assert_eq!(
        order,
        vec!["-1.png", "01_intro.png", "01.png", "1.png", "a.png", "A.png"]
    );
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_is_read() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let images = temp_dir.path().join("slides");
    fs::create_dir(&images).expect("Failed to create slides directory");
    fs::write(images.join("01.png"), b"first").expect("Failed to write image");
    fs::write(images.join(OsStr::from_bytes(b"02\xff.png")), b"second")
        .expect("Failed to write image");
    let output = temp_dir.path().join("deck.pptx");

    let result = assemble_slides(&images, &output).expect("Assembly failed");
    assert_eq!(result.slide_count, 2);

    let mut archive = open_deck(&output);
    assert_eq!(read_entry(&mut archive, "ppt/media/image1.png"), "first");
    assert_eq!(read_entry(&mut archive, "ppt/media/image2.png"), "second");
}
