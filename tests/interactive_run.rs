use std::io::Cursor;
use std::path::Path;

use image::Rgb;
use tempfile::tempdir;

use glasses_compositor::{
    app,
    error::{CompositorError, SelectionError},
    prompt::Answers,
    Config, Frame, NoPreview, Preview,
};

/// Records what it was asked to show instead of opening a window
#[derive(Default)]
struct RecordingPreview {
    shown: Vec<(u32, u32)>,
}

impl Preview for RecordingPreview {
    fn show(&mut self, frame: &Frame) -> glasses_compositor::Result<()> {
        self.shown.push(frame.dimensions());
        Ok(())
    }
}

/// Catalog directory with two frames and two textures, output inside it
fn fixture(dir: &Path) -> Config {
    let images = dir.join("images");
    std::fs::create_dir_all(&images).unwrap();

    let frame = |offset: u32| {
        Frame::from_fn(300, 120, move |x, y| {
            let rim = (x + offset) % 100 < 20 && y > 20 && y < 100;
            if rim { Rgb([220, 220, 220]) } else { Rgb([0, 0, 0]) }
        })
    };
    frame(0).save(images.join("new_frame1.png")).unwrap();
    frame(50).save(images.join("new_frame2.png")).unwrap();

    let texture = Frame::from_fn(150, 60, |x, y| {
        if (x / 5 + y / 5) % 2 == 0 { Rgb([250, 250, 250]) } else { Rgb([0, 0, 0]) }
    });
    texture.save(images.join("texture1.jpg")).unwrap();
    texture.save(images.join("texture2.jpg")).unwrap();

    let mut config = Config::default();
    config.catalog.images_dir = images.clone();
    config.output.path = images.join("new_glasses.png");
    config.preview.enabled = false;
    config
}

#[test]
fn red_frame_with_gold_texture_is_saved_at_output_width() {
    let dir = tempdir().unwrap();
    let config = fixture(dir.path());
    let mut preview = RecordingPreview::default();
    let mut stdout = Vec::<u8>::new();

    let path = app::run(
        &config,
        &Answers::default(),
        Cursor::new("1\n(0,0,255)\n1\n(0,215,255)\n"),
        &mut stdout,
        &mut preview,
    )
    .unwrap();

    assert_eq!(path, config.output.path);
    let written = Frame::open(&path).unwrap();
    // 300x120 scaled to width 900
    assert_eq!(written.dimensions(), (900, 360));
    assert_eq!(preview.shown, vec![(900, 360)]);

    let mut saw_red = false;
    let mut saw_gold = false;
    for (_, _, p) in written.pixels() {
        saw_red |= p == [255, 0, 0];
        saw_gold |= p == [255, 215, 0];
    }
    assert!(saw_red && saw_gold);

    let stdout = String::from_utf8(stdout).unwrap();
    assert!(stdout.contains("Press any key in the preview window"));
    assert!(stdout.contains("New glasses generated:"));
}

#[test]
fn unparseable_frame_color_falls_back_and_completes() {
    let dir = tempdir().unwrap();
    let config = fixture(dir.path());
    let mut stdout = Vec::<u8>::new();

    let path = app::run(
        &config,
        &Answers::default(),
        Cursor::new("2\nred\n2\n(0,215,255)\n"),
        &mut stdout,
        &mut NoPreview,
    )
    .unwrap();

    assert!(path.exists());
    let stdout = String::from_utf8(stdout).unwrap();
    assert!(stdout.contains("Invalid input, using default color (0,0,255)"));
    assert!(!stdout.contains("Press any key"));
}

#[test]
fn invalid_frame_choice_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = fixture(dir.path());
    let mut stdout = Vec::<u8>::new();

    let err = app::run(
        &config,
        &Answers::default(),
        Cursor::new("3\n(0,0,255)\n1\n(0,215,255)\n"),
        &mut stdout,
        &mut NoPreview,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CompositorError::Selection(SelectionError::UnknownFrame { .. })
    ));
    assert!(!config.output.path.exists());
}

#[test]
fn invalid_choice_leaves_previous_output_untouched() {
    let dir = tempdir().unwrap();
    let config = fixture(dir.path());
    let previous = Frame::new_filled(4, 4, Rgb([1, 2, 3]));
    previous.save(&config.output.path).unwrap();

    let preset = Answers {
        frame: Some("1".to_string()),
        frame_color: Some("0,0,255".to_string()),
        texture: Some("9".to_string()),
        texture_color: None,
    };
    let result = app::run(&config, &preset, Cursor::new(""), std::io::sink(), &mut NoPreview);

    assert!(result.is_err());
    assert_eq!(Frame::open(&config.output.path).unwrap(), previous);
}

#[test]
fn missing_frame_file_is_fatal_before_color_questions() {
    let dir = tempdir().unwrap();
    let config = fixture(dir.path());
    std::fs::remove_file(config.catalog.images_dir.join("new_frame1.png")).unwrap();
    let mut stdout = Vec::<u8>::new();

    let result = app::run(
        &config,
        &Answers::default(),
        Cursor::new("1\n0,0,255\n1\n0,215,255\n"),
        &mut stdout,
        &mut NoPreview,
    );

    assert!(matches!(result, Err(CompositorError::Image(_))));
    assert!(!config.output.path.exists());

    let stdout = String::from_utf8(stdout).unwrap();
    assert!(stdout.contains("Choose a frame shape:"));
    assert!(!stdout.contains("frame color"));
    assert!(!stdout.contains("Choose a texture:"));
}
