//! Game bootstrap: screen init, splash banner, task registration.

use std::sync::Arc;
use std::thread;

use serial_pong_core::{Ball, Court, Paddle};
use serial_pong_input::InputSampler;
use serial_pong_term::{RenderLock, Transport};

use crate::config::PongConfig;
use crate::scheduler::{PeriodicTask, Scheduler, SchedulerError, TaskHandle, TaskSpec};
use crate::score::ScoreTracker;
use crate::tasks::{BallTask, PaddleTask};
use crate::types::{
    Position, Side, BALL_PRIO, BALL_X_START, BALL_Y_START, PADDLE_LEFT_PRIO, PADDLE_RIGHT_PRIO,
    TITLE_X, TITLE_Y,
};

pub const TITLE: &str = "SERIAL PONG";

/// Result of [`launch`]: the units that started and the ones that did not.
#[derive(Debug, Default)]
pub struct Launched {
    pub tasks: Vec<TaskHandle>,
    pub failures: Vec<SchedulerError>,
}

impl Launched {
    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// Show the title banner for `config.splash`.
pub fn show_splash<T: Transport>(screen: &RenderLock<T>, config: &PongConfig) {
    if config.splash.is_zero() {
        return;
    }
    {
        let mut guard = screen.acquire();
        guard.init_screen();
        if let Err(e) = guard.write_text(TITLE_X, TITLE_Y, TITLE) {
            log::debug!("title not drawn: {}", e);
        }
    }
    thread::sleep(config.splash);
}

/// Prepare the screen and register every simulation unit with `scheduler`.
///
/// A unit that fails to register is logged and skipped; the others still run.
pub fn launch<T, S, Sch>(
    config: &PongConfig,
    screen: Arc<RenderLock<T>>,
    inputs: S,
    scheduler: &Sch,
) -> Launched
where
    T: Transport + 'static,
    S: InputSampler + Clone + 'static,
    Sch: Scheduler + ?Sized,
{
    show_splash(&screen, config);

    let mut court = Court::new(config.walls);
    let mut paddles = Vec::new();
    if config.paddles {
        for (side, prio, name) in [
            (Side::Left, PADDLE_LEFT_PRIO, "PaddleLeft"),
            (Side::Right, PADDLE_RIGHT_PRIO, "PaddleRight"),
        ] {
            let paddle = Paddle::for_side(side);
            court = court.with_paddle(paddle.track().clone());
            let task = PaddleTask::new(paddle, Arc::clone(&screen), inputs.clone());
            paddles.push((TaskSpec::new(name, prio, config.paddle_tick), task));
        }
    }

    let ball = BallTask::new(
        Ball::new(Position::new(BALL_X_START, BALL_Y_START)),
        court,
        ScoreTracker::new(),
        Arc::clone(&screen),
        inputs,
    );

    {
        let mut guard = screen.acquire();
        guard.init_screen();
        if let Err(e) = ball.scores().render_all(&mut guard) {
            log::debug!("scores not drawn: {}", e);
        }
        for (_, task) in &paddles {
            task.draw_initial(&mut guard);
        }
        ball.draw_initial(&mut guard);
    }

    log::info!(
        "starting: walls={}, paddles={}, ball tick {:?}",
        config.walls.as_str(),
        config.paddles,
        config.ball_tick
    );

    let mut units: Vec<(TaskSpec, Box<dyn PeriodicTask>)> = vec![(
        TaskSpec::new("Ball", BALL_PRIO, config.ball_tick),
        Box::new(ball) as Box<dyn PeriodicTask>,
    )];
    for (spec, task) in paddles {
        units.push((spec, Box::new(task) as Box<dyn PeriodicTask>));
    }
    units.sort_by_key(|(spec, _)| spec.priority);

    let mut launched = Launched::default();
    for (spec, task) in units {
        match scheduler.spawn(spec, task) {
            Ok(handle) => launched.tasks.push(handle),
            Err(e) => {
                log::error!("{}", e);
                launched.failures.push(e);
            }
        }
    }
    launched
}
