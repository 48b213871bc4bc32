use render::{Canvas, Color};

const RED: Color = Color::rgb(200, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 200);

#[test]
fn fill_covers_every_pixel() {
    let mut canvas = Canvas::new(16, 8);
    canvas.fill(BLUE);
    assert_eq!(canvas.pixel(0, 0), Some(BLUE));
    assert_eq!(canvas.pixel(15, 7), Some(BLUE));
    assert_eq!(canvas.pixel(16, 0), None);
}

#[test]
fn fill_rect_clips_to_the_canvas() {
    let mut canvas = Canvas::new(20, 20);
    canvas.fill(BLUE);
    canvas.fill_rect(-5, -5, 10, 10, RED);
    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(4, 4), Some(RED));
    assert_eq!(canvas.pixel(5, 5), Some(BLUE));

    // Entirely off-screen draws must be harmless no-ops.
    canvas.fill_rect(100, 100, 10, 10, RED);
    canvas.fill_rect(-50, -50, 10, 10, RED);
}

#[test]
fn stroke_rect_leaves_the_interior_untouched() {
    let mut canvas = Canvas::new(20, 20);
    canvas.fill(BLUE);
    canvas.stroke_rect(2, 2, 10, 10, 2, RED);
    assert_eq!(canvas.pixel(2, 2), Some(RED));
    assert_eq!(canvas.pixel(3, 3), Some(RED));
    assert_eq!(canvas.pixel(6, 6), Some(BLUE));
    assert_eq!(canvas.pixel(11, 11), Some(RED));
}

#[test]
fn lines_cover_their_endpoints() {
    let mut canvas = Canvas::new(40, 40);
    canvas.fill(BLUE);
    canvas.draw_line(5.0, 20.0, 35.0, 20.0, 4.0, RED);
    assert_eq!(canvas.pixel(6, 20), Some(RED));
    assert_eq!(canvas.pixel(20, 20), Some(RED));
    assert_eq!(canvas.pixel(34, 20), Some(RED));
    // Two pixels above the 4 px band the line must not reach.
    assert_eq!(canvas.pixel(20, 16), Some(BLUE));
}

#[test]
fn circles_are_round() {
    let mut canvas = Canvas::new(40, 40);
    canvas.fill(BLUE);
    canvas.fill_circle(20.0, 20.0, 8.0, RED);
    assert_eq!(canvas.pixel(20, 20), Some(RED));
    assert_eq!(canvas.pixel(26, 20), Some(RED));
    // Corner of the bounding box lies outside the disc.
    assert_eq!(canvas.pixel(27, 27), Some(BLUE));
}

#[test]
fn triangles_fill_their_interior_only() {
    let mut canvas = Canvas::new(40, 40);
    canvas.fill(BLUE);
    canvas.fill_triangle((5.0, 35.0), (35.0, 35.0), (20.0, 5.0), RED);
    assert_eq!(canvas.pixel(20, 30), Some(RED));
    assert_eq!(canvas.pixel(6, 6), Some(BLUE));

    // Clockwise winding fills the same pixels.
    let mut cw = Canvas::new(40, 40);
    cw.fill(BLUE);
    cw.fill_triangle((20.0, 5.0), (35.0, 35.0), (5.0, 35.0), RED);
    assert_eq!(cw.pixel(20, 30), Some(RED));
}

#[test]
fn save_png_writes_a_file() {
    let mut canvas = Canvas::new(8, 8);
    canvas.fill(RED);
    let path = std::env::temp_dir().join(format!("canvas-test-{}.png", std::process::id()));
    canvas.save_png(&path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(&path).ok();
}
