use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::{engine_debug, engine_info};
use guestbook_core::Msg;
use guestbook_engine::EngineHandle;

use super::controller::Controller;
use super::effects::EffectRunner;
use super::ui::input::{map_key, UiAction};
use super::ui::render::render;
use crate::config::AppConfig;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    let engine =
        EngineHandle::new(config.engine_config()?).context("failed to set up RPC client")?;
    let mut controller = Controller::new(EffectRunner::new(engine));

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut controller, config);
    ratatui::restore();
    engine_info!("UI closed");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    controller: &mut Controller,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut redraw = true;
    loop {
        controller.drain_engine();
        if controller.consume_dirty() || redraw {
            let view = controller.view();
            terminal.draw(|frame| render(frame, &view, config))?;
            redraw = false;
        }

        if !event::poll(FRAME_INTERVAL)? {
            controller.dispatch(Msg::Tick);
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, &controller.view()) {
                    Some(UiAction::Quit) => return Ok(()),
                    Some(UiAction::Dispatch(msg)) => {
                        engine_debug!("ui -> {:?}", msg);
                        controller.dispatch(msg);
                    }
                    None => {}
                }
            }
            Event::Resize(..) => redraw = true,
            _ => {}
        }
    }
}
