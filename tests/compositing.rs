use cairo::ImageSurface;
use sketchboard::annotation::{EditOutcome, TextEdit};
use sketchboard::codec::{self, ExportFormat};
use sketchboard::draw::FontDescriptor;
use sketchboard::draw::color::BLACK;
use sketchboard::draw::surface::{argb_pixels, pixel_at};
use sketchboard::input::{MouseButton, Tool};
use sketchboard::{Config, InteractionController};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn controller(width: i32, height: i32) -> InteractionController {
    init_logging();
    let mut controller = InteractionController::new(&Config::default());
    controller.resize_viewport(width, height).unwrap();
    controller
}

fn place_text(controller: &mut InteractionController, text: &str, x: i32, y: i32) {
    let edit = TextEdit::new(text, FontDescriptor::default(), BLACK).unwrap();
    assert!(controller.begin_add_text(EditOutcome::Confirmed(edit)));
    controller.on_pointer_move(x, y).unwrap();
    controller.on_pointer_down(MouseButton::Left, x, y);
}

fn count_pixels(surface: &ImageSurface, predicate: impl Fn([u8; 4]) -> bool) -> usize {
    let mut count = 0;
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if pixel_at(surface, x, y).is_some_and(&predicate) {
                count += 1;
            }
        }
    }
    count
}

fn is_orange_red([r, g, b, _]: [u8; 4]) -> bool {
    r > 200 && (40..=110).contains(&g) && b < 60
}

#[test]
fn exported_text_is_opaque_and_has_no_selection_outline() {
    let mut controller = controller(240, 120);
    place_text(&mut controller, "Hi", 10, 10);
    assert_eq!(controller.annotations().selected(), Some(0));

    let display = controller.render_display().unwrap();
    let export = controller.render_export().unwrap();

    // Selection chrome is on screen only.
    assert!(count_pixels(&display, is_orange_red) > 0);
    assert_eq!(count_pixels(&export, is_orange_red), 0);

    // Glyph pixels exist, all inside the annotation box anchored at (10, 10).
    let bounds = controller.annotations().get(0).unwrap().bounds().unwrap();
    assert_eq!((bounds.x, bounds.y), (10, 10));
    let mut glyph_pixels = 0;
    for y in 0..export.height() {
        for x in 0..export.width() {
            let [r, g, b, a] = pixel_at(&export, x, y).unwrap();
            assert_eq!(a, 255);
            if r < 64 && g < 64 && b < 64 {
                glyph_pixels += 1;
                assert!(x >= 10 && y >= 10, "ink above/left of anchor at ({x}, {y})");
            }
        }
    }
    assert!(glyph_pixels > 0);
}

#[test]
fn export_without_annotations_equals_surface() {
    let mut controller = controller(64, 64);
    controller.tool = Tool::Arc;
    controller.on_pointer_down(MouseButton::Left, 4, 4);
    controller.on_pointer_up(MouseButton::Left, 60, 60).unwrap();

    let export = controller.render_export().unwrap();
    assert_eq!(
        argb_pixels(&export).unwrap(),
        argb_pixels(controller.surface().image().unwrap()).unwrap()
    );
}

#[test]
fn png_export_round_trips_through_import() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("picture.png");

    let mut source = controller(120, 80);
    source.toggles.blue = true;
    source.on_pointer_down(MouseButton::Left, 0, 40);
    source.on_pointer_move(119, 40).unwrap();
    source.on_pointer_up(MouseButton::Left, 119, 40).unwrap();
    place_text(&mut source, "Saved", 20, 5);

    assert_eq!(source.export_to_file(&path).unwrap(), ExportFormat::Png);
    let expected = argb_pixels(&source.render_export().unwrap()).unwrap();

    let mut target = controller(120, 80);
    target.import_image_file(&path).unwrap();
    assert_eq!(argb_pixels(target.surface().image().unwrap()).unwrap(), expected);
    assert!(target.annotations().is_empty());
}

#[test]
fn import_stretches_to_canvas_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.bmp");

    let mut small = controller(10, 10);
    small.toggles.red = true;
    small.set_pen_width(40.0);
    small.on_pointer_down(MouseButton::Left, 5, -20);
    small.on_pointer_move(5, 30).unwrap();
    assert_eq!(small.export_to_file(&path).unwrap(), ExportFormat::Bmp);

    let mut canvas = controller(200, 100);
    canvas.import_image_file(&path).unwrap();
    let image = canvas.surface().image().unwrap();
    for (x, y) in [(1, 1), (198, 1), (100, 50), (198, 98)] {
        let [r, g, b, _] = pixel_at(image, x, y).unwrap();
        assert!(r > 200 && g < 60 && b < 60, "({x}, {y}) should be red");
    }
}

#[test]
fn jpeg_export_is_flattened_on_white() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.JPG");

    let mut controller = controller(32, 32);
    place_text(&mut controller, "J", 4, 4);
    assert_eq!(controller.export_to_file(&path).unwrap(), ExportFormat::Jpeg);

    let decoded = codec::load_image(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
    assert_eq!(pixel_at(&decoded, 31, 31).unwrap()[3], 255);
}

#[test]
fn failed_import_leaves_canvas_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not really a png").unwrap();

    let mut controller = controller(40, 40);
    controller.on_pointer_down(MouseButton::Left, 0, 20);
    controller.on_pointer_move(39, 20).unwrap();
    controller.on_pointer_up(MouseButton::Left, 39, 20).unwrap();
    let before = argb_pixels(controller.surface().image().unwrap()).unwrap();

    assert!(controller.import_image_file(&path).is_err());
    assert_eq!(argb_pixels(controller.surface().image().unwrap()).unwrap(), before);
}

#[test]
fn unknown_extension_exports_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.xyz");

    let controller = controller(16, 16);
    assert_eq!(controller.export_to_file(&path).unwrap(), ExportFormat::Png);
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
