//! Stylized 2D cart-pole scene.
//!
//! Drawing is a pure function of (cart position, pole angle, last action):
//! the cart body, the pole as a projected line, an arrow showing the sign of
//! the applied force, a static rail, and two wheels. A set of decorative
//! background rectangles scrolls by to give a sense of motion; their speed is
//! constant and unrelated to the simulation state.

use render::{Canvas, Color};

use crate::config::{
    ARROW_COLOR, BACKGROUND_COLOR, BACKGROUND_SPEED, BUILDING_COLOR, CART_COLOR, OUTLINE_COLOR,
    POLE_COLOR, RAIL_COLOR, SCALE, SCREEN_HEIGHT, SCREEN_WIDTH, TREE_COLOR,
};

const CART_WIDTH: u32 = 80;
const CART_HEIGHT: u32 = 40;
const POLE_LENGTH: f32 = 100.0;
const ARROW_LENGTH: f32 = 50.0;
const ARROW_HEAD_SIZE: f32 = 10.0;
const WHEEL_RADIUS: f32 = 10.0;

/// A purely decorative rectangle that scrolls leftward and wraps around.
pub struct BackgroundObject {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
    /// Offsets the wrap-around re-entry point to vary apparent depth.
    pub speed_factor: f32,
}

impl BackgroundObject {
    #[must_use]
    pub fn new(x: f32, y: f32, width: u32, height: u32, color: Color, speed_factor: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            speed_factor,
        }
    }

    /// Moves the object one frame to the left; once its right edge passes
    /// the left screen edge it re-enters from the right, offset by its
    /// depth factor.
    pub fn scroll(&mut self) {
        self.x -= BACKGROUND_SPEED;
        if self.x + (self.width as f32) < 0.0 {
            self.x = SCREEN_WIDTH as f32 + self.width as f32 * self.speed_factor;
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.x as i32, self.y as i32, self.width, self.height, self.color);
    }
}

/// The fixed backdrop: three buildings and two trees.
#[must_use]
pub fn default_backdrop() -> Vec<BackgroundObject> {
    vec![
        BackgroundObject::new(100.0, 450.0, 50, 80, BUILDING_COLOR, 0.2),
        BackgroundObject::new(400.0, 480.0, 30, 50, BUILDING_COLOR, 0.5),
        BackgroundObject::new(700.0, 470.0, 40, 60, BUILDING_COLOR, 0.8),
        BackgroundObject::new(250.0, 520.0, 20, 30, TREE_COLOR, 0.3),
        BackgroundObject::new(550.0, 510.0, 25, 40, TREE_COLOR, 0.6),
    ]
}

/// Paints one complete frame: backdrop, then the cart-pole itself.
pub fn draw_scene(
    canvas: &mut Canvas,
    backdrop: &[BackgroundObject],
    cart_position: f32,
    pole_angle: f32,
    action: usize,
) {
    canvas.fill(BACKGROUND_COLOR);
    for object in backdrop {
        object.draw(canvas);
    }
    draw_cart(canvas, cart_position, pole_angle, action);
}

/// Draws the cart, pole, force arrow, rail, and wheels.
pub fn draw_cart(canvas: &mut Canvas, cart_position: f32, pole_angle: f32, action: usize) {
    let cart_x = cart_position * SCALE + SCREEN_WIDTH as f32 / 2.0;
    let cart_y = (SCREEN_HEIGHT * 4 / 5) as f32;
    let half_w = CART_WIDTH as f32 / 2.0;
    let half_h = CART_HEIGHT as f32 / 2.0;

    canvas.fill_rect(
        (cart_x - half_w) as i32,
        (cart_y - half_h) as i32,
        CART_WIDTH,
        CART_HEIGHT,
        CART_COLOR,
    );
    canvas.stroke_rect(
        (cart_x - half_w) as i32,
        (cart_y - half_h) as i32,
        CART_WIDTH,
        CART_HEIGHT,
        2,
        OUTLINE_COLOR,
    );

    // Pole, projected from its angle off vertical.
    let pole_end_x = cart_x + POLE_LENGTH * pole_angle.sin();
    let pole_end_y = cart_y - POLE_LENGTH * pole_angle.cos();
    canvas.draw_line(cart_x, cart_y, pole_end_x, pole_end_y, 10.0, POLE_COLOR);

    // Arrow showing which way the cart is being pushed.
    let arrow_y = cart_y - half_h;
    let arrow_end_x = if action == 1 {
        cart_x + ARROW_LENGTH
    } else {
        cart_x - ARROW_LENGTH
    };
    canvas.draw_line(cart_x, arrow_y, arrow_end_x, arrow_y, 5.0, ARROW_COLOR);
    // Head points back along the shaft: zero when the arrow points left,
    // pi when it points right.
    let angle = 0.0_f32.atan2(cart_x - arrow_end_x);
    let left = (
        arrow_end_x + ARROW_HEAD_SIZE * (angle - std::f32::consts::FRAC_PI_6).cos(),
        arrow_y + ARROW_HEAD_SIZE * (angle - std::f32::consts::FRAC_PI_6).sin(),
    );
    let right = (
        arrow_end_x + ARROW_HEAD_SIZE * (angle + std::f32::consts::FRAC_PI_6).cos(),
        arrow_y + ARROW_HEAD_SIZE * (angle + std::f32::consts::FRAC_PI_6).sin(),
    );
    canvas.fill_triangle((arrow_end_x, arrow_y), left, right, ARROW_COLOR);

    // Rail the cart slides along.
    let rail_y = cart_y + half_h + 5.0;
    canvas.draw_line(0.0, rail_y, SCREEN_WIDTH as f32, rail_y, 4.0, RAIL_COLOR);

    // Wheels.
    let wheel_y = cart_y + half_h + WHEEL_RADIUS / 2.0 - 5.0;
    canvas.fill_circle(cart_x - half_w / 2.0, wheel_y, WHEEL_RADIUS, OUTLINE_COLOR);
    canvas.fill_circle(cart_x + half_w / 2.0, wheel_y, WHEEL_RADIUS, OUTLINE_COLOR);
}
