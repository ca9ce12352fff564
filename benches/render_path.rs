use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serial_pong::core::{Ball, Court, Paddle, WallPolicy};
use serial_pong::engine::{BallTask, ScoreTracker};
use serial_pong::input::InputLatch;
use serial_pong::term::{protocol, RenderLock, TerminalRenderer};
use serial_pong::types::{InputState, LogicalInput, Position, Side};

fn bench_encode_move(c: &mut Criterion) {
    c.bench_function("encode_move_cursor", |b| {
        b.iter(|| protocol::move_cursor(black_box(12), black_box(13)))
    });
}

fn bench_write_glyph(c: &mut Criterion) {
    let mut r = TerminalRenderer::new(Vec::<u8>::with_capacity(1 << 20));
    c.bench_function("write_glyph", |b| {
        b.iter(|| {
            if r.transport().len() > (1 << 19) {
                r.transport_mut().clear();
            }
            r.write_glyph(black_box(40), black_box(12), b'*')
        })
    });
}

fn bench_ball_step(c: &mut Criterion) {
    let court = Court::new(WallPolicy::Bounce)
        .with_paddle(Paddle::for_side(Side::Left).track().clone())
        .with_paddle(Paddle::for_side(Side::Right).track().clone());
    let mut ball = Ball::new(Position::new(40, 12));
    let inputs = InputState::empty().with(LogicalInput::LeftUp);

    c.bench_function("ball_step", |b| {
        b.iter(|| ball.step(black_box(inputs), &court))
    });
}

fn bench_ball_tick(c: &mut Criterion) {
    let lock = Arc::new(RenderLock::new(TerminalRenderer::new(Vec::<u8>::with_capacity(1 << 20))));
    let mut task = BallTask::new(
        Ball::new(Position::new(40, 12)),
        Court::new(WallPolicy::Bounce),
        ScoreTracker::new(),
        Arc::clone(&lock),
        Arc::new(InputLatch::new()),
    );

    c.bench_function("ball_tick_locked", |b| {
        b.iter(|| {
            task.step();
            let mut screen = lock.acquire();
            if screen.transport().len() > (1 << 19) {
                screen.transport_mut().clear();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_encode_move,
    bench_write_glyph,
    bench_ball_step,
    bench_ball_tick
);
criterion_main!(benches);
