use pendulum::config::{SCREEN_WIDTH, SLOW_MOTION_FACTOR};
use pendulum::scene::BackgroundObject;
use pendulum::session::ReplaySession;
use ppo::Ppo;
use render::Color;

const BROWN: Color = Color::rgb(150, 75, 0);

fn scroll_until_wrap(object: &mut BackgroundObject) -> usize {
    for i in 0..10_000 {
        let before = object.x;
        object.scroll();
        if object.x > before {
            return i;
        }
    }
    panic!("object never wrapped");
}

#[test]
fn backdrop_wraps_to_the_depth_offset_position() {
    let mut object = BackgroundObject::new(700.0, 450.0, 40, 80, BROWN, 0.8);
    scroll_until_wrap(&mut object);
    assert_eq!(object.x, SCREEN_WIDTH as f32 + 40.0 * 0.8);
}

#[test]
fn backdrop_wrap_is_position_independent() {
    for start in [0.0_f32, 33.0, 150.5, 799.0, -10.0] {
        let mut object = BackgroundObject::new(start, 500.0, 40, 60, BROWN, 0.5);
        scroll_until_wrap(&mut object);
        assert_eq!(
            object.x,
            SCREEN_WIDTH as f32 + 40.0 * 0.5,
            "wrap target must not depend on the starting position {start}"
        );
    }
}

#[test]
fn backdrop_only_wraps_once_fully_off_screen() {
    let mut object = BackgroundObject::new(10.0, 500.0, 40, 60, BROWN, 0.5);
    object.scroll();
    // Left edge is off-screen but the right edge is still visible.
    assert!(object.x < 10.0 && object.x + 40.0 > 0.0);
}

#[test]
fn actions_are_held_between_decision_frames() {
    let mut env = env::make("CartPole-v1").unwrap();
    env.seed(11);
    let policy = Ppo::with_seed(4, 2, 11);
    let mut session = ReplaySession::new(env, policy);

    let mut actions = Vec::new();
    for _ in 0..60 {
        let frame = session.advance();
        actions.push(frame.action);
        if frame.done {
            break;
        }
    }
    assert!(actions.len() >= SLOW_MOTION_FACTOR, "episode ended too early to observe throttling");
    for (i, action) in actions.iter().enumerate() {
        let decision_frame = i - i % SLOW_MOTION_FACTOR;
        assert_eq!(
            *action, actions[decision_frame],
            "frame {i} must reuse the action chosen at frame {decision_frame}"
        );
    }
}

#[test]
fn advancing_a_finished_session_is_a_noop() {
    let mut env = env::make("CartPole-v1").unwrap();
    env.seed(5);
    let policy = Ppo::with_seed(4, 2, 5);
    let mut session = ReplaySession::new(env, policy);

    let mut frames = 0;
    while !session.advance().done {
        frames += 1;
        assert!(frames <= 500, "episode must end within the step limit");
    }
    let settled = session.advance();
    assert!(settled.done);
    assert!(session.is_done());
}
