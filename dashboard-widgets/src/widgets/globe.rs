//! Canvas globe
//!
//! Decorative rotating sphere. Geometry comes from `logic::globe`; this
//! module owns the canvas, the resize listener and the frame loop. The
//! listener is released by the frame loop once the canvas is detached.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::constants;
use crate::dom::{self, listener::Listener};
use crate::error::{WidgetError, WidgetResult};
use crate::logic::globe::{GlobeFrame, GlobeState, RadialGradient};
use crate::logic::{Attachment, DashboardConfig, Tick};

/// Replace `container`'s contents with an animated globe
pub fn mount(container: &Element, config: &DashboardConfig) -> WidgetResult<()> {
    let document = dom::document()?;
    container.set_inner_html("");

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| WidgetError::WrongElementType(constants::GLOBE_CANVAS_ID))?;
    canvas.set_id(constants::GLOBE_CANVAS_ID);
    container.append_child(&canvas)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(WidgetError::NoCanvasContext)?
        .dyn_into()
        .map_err(|_| WidgetError::NoCanvasContext)?;

    let height = config.globe_height;
    let state = Rc::new(RefCell::new(GlobeState::new(0.0, 0.0)));
    resize(container, &canvas, height, &state);

    let on_resize = {
        let container = container.clone();
        let canvas = canvas.clone();
        let state = state.clone();
        Listener::on_window("resize", move |_| resize(&container, &canvas, height, &state))?
    };
    let mut attachment = Attachment::new(on_resize);

    dom::frame::run(move |_now: f64| {
        if attachment.check(canvas.is_connected()) == Tick::Stop {
            log::debug!("Globe canvas detached, stopping animation");
            return Tick::Stop;
        }
        let (width, height) = state.borrow().size();
        let frame = state.borrow_mut().next_frame();
        if let Err(e) = paint(&ctx, width, height, frame.as_ref()) {
            log::warn!("Globe frame failed: {}", e);
            return Tick::Stop;
        }
        Tick::Continue
    })
}

fn resize(container: &Element, canvas: &HtmlCanvasElement, height: u32, state: &Rc<RefCell<GlobeState>>) {
    let width = container.client_width().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    state.borrow_mut().resize(width as f64, height as f64);
}

fn radial(ctx: &CanvasRenderingContext2d, g: &RadialGradient, inner: &str, outer: &str) -> WidgetResult<web_sys::CanvasGradient> {
    let gradient = ctx.create_radial_gradient(g.x0, g.y0, g.r0, g.x1, g.y1, g.r1)?;
    gradient.add_color_stop(0.0, inner)?;
    gradient.add_color_stop(1.0, outer)?;
    Ok(gradient)
}

fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, frame: Option<&GlobeFrame>) -> WidgetResult<()> {
    ctx.clear_rect(0.0, 0.0, width, height);
    let Some(f) = frame else {
        return Ok(());
    };

    // Outer glow
    let glow = radial(ctx, &f.glow, constants::GLOBE_GLOW_INNER, constants::GLOBE_GLOW_OUTER)?;
    ctx.set_fill_style_canvas_gradient(&glow);
    ctx.begin_path();
    ctx.arc(f.cx, f.cy, f.glow_radius, 0.0, PI * 2.0)?;
    ctx.fill();

    // Body
    let body = radial(ctx, &f.body, constants::GLOBE_BODY_INNER, constants::GLOBE_BODY_OUTER)?;
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.begin_path();
    ctx.arc(f.cx, f.cy, f.radius, 0.0, PI * 2.0)?;
    ctx.fill();

    // Outline
    ctx.set_stroke_style_str(constants::GLOBE_OUTLINE);
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Latitudes
    ctx.set_stroke_style_str(constants::GLOBE_GRID);
    ctx.set_line_width(1.0);
    for lat in &f.latitudes {
        ctx.begin_path();
        ctx.ellipse(f.cx, f.cy, lat.radius_x, lat.radius_y, 0.0, 0.0, PI * 2.0)?;
        ctx.stroke();
    }

    // Longitudes (rotating)
    for lon in &f.longitudes {
        ctx.save();
        ctx.translate(f.cx, f.cy)?;
        ctx.rotate(lon.rotation)?;
        ctx.begin_path();
        ctx.ellipse(0.0, 0.0, lon.radius_x, lon.radius_y, 0.0, 0.0, PI * 2.0)?;
        ctx.stroke();
        ctx.restore();
    }

    Ok(())
}
