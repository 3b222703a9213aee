//! Print the rectangles and splitters of every layout mode, then replay a
//! short splitter drag.
//!
//! Run with an optional mode name to dump a single mode:
//!
//! ```sh
//! cargo run -p quadsplit-ui --example layout_dump -- top-span
//! RUST_LOG=trace cargo run -p quadsplit-ui --example layout_dump
//! ```

use quadsplit_core::geometry::Size;
use quadsplit_core::math::vec2_from_mint;
use quadsplit_ui::{LayoutConfig, LayoutContainer, LayoutMode};

/// Window size as a windowing crate would report it.
const WINDOW: mint::Vector2<f32> = mint::Vector2 { x: 640.0, y: 480.0 };

fn dump(container: &LayoutContainer) {
    tracing::info!("== {} ==", container.mode());
    for (position, rect) in container.layout_rectangles() {
        tracing::info!("  {:<12} {:?}", position.to_string(), rect);
    }
    for (index, splitter) in container.splitters().iter().enumerate() {
        tracing::info!(
            "  splitter {} {:?}/{:?} {:?}",
            index,
            splitter.direction,
            splitter.role,
            splitter.rect
        );
    }
    for cell in container.cells() {
        tracing::info!(
            "  cell {} -> {} (visible: {})",
            cell.index(),
            cell.position(),
            cell.is_visible()
        );
    }
}

/// Press on the first splitter and drag it a quarter of the way along its axis.
fn replay_drag(container: &mut LayoutContainer) {
    let Some(splitter) = container.splitters().first().copied() else {
        tracing::info!("  no splitters to drag");
        return;
    };
    let r = splitter.rect;
    let press = mint::Point2 {
        x: r.x + r.width / 2.0,
        y: r.y + r.height / 2.0,
    };
    let release = if r.is_wide() {
        mint::Point2 { x: press.x, y: press.y + WINDOW.y / 4.0 }
    } else {
        mint::Point2 { x: press.x + WINDOW.x / 4.0, y: press.y }
    };

    if container.pointer_down(vec2_from_mint(press)) {
        let cursor = container.pointer_move(vec2_from_mint(release));
        container.pointer_up();
        tracing::info!(
            "  dragged splitter 0 to {:?} ({:?}), fractions {:?}",
            release,
            cursor,
            container.fractions()
        );
    }
}

fn main() {
    quadsplit_core::logging::init();
    quadsplit_core::profiling::set_enabled(true);

    let modes = match std::env::args().nth(1) {
        Some(name) => match name.parse::<LayoutMode>() {
            Ok(mode) => vec![mode],
            Err(err) => {
                tracing::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => LayoutMode::ALL.to_vec(),
    };

    let size: Size<f32> = WINDOW.into();
    for mode in modes {
        quadsplit_core::profiling::new_frame();
        let mut container = LayoutContainer::with_config(LayoutConfig::new().with_mode(mode));
        container.set_size(size.width, size.height);
        dump(&container);
        replay_drag(&mut container);
    }
}
