//! Threat map
//!
//! SVG world map with live/demo threat markers.
//!
//! Lifecycle:
//! 1. mount: create the SVG and background, bind the mode buttons
//! 2. load world geometry; on failure the map stays blank
//! 3. first refresh, then one every `refresh_interval_ms` and on each mode click
//! 4. a single frame task, started at mount, animates marker moves and pulse
//!    rings; once the SVG leaves the document it drops the refresh interval
//!    and every listener the map registered

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::constants;
use crate::dom::{self, fetch, listener::Listener, timer::Interval};
use crate::error::WidgetResult;
use crate::logic::threat::{
    demo_threats, diff_markers, feature_path, pulse_at, select_threats, translate, DataMode,
    Mercator, RefreshGuard, RefreshToken, ThreatMarker, Topology, Tween,
};
use crate::logic::{Attachment, DashboardConfig, Tick};
use super::modal;

// ============================================================================
// MARKERS
// ============================================================================

/// One rendered marker group
struct MarkerNode {
    group: Element,
    ring: Element,
    datum: Rc<RefCell<ThreatMarker>>,
    tween: Tween,
    born_ms: f64,
    placed: bool,
    _on_click: Closure<dyn FnMut(Event)>,
}

/// The `threat-layer` group and the markers inside it
struct ThreatLayer {
    document: Document,
    layer: Element,
    projection: Mercator,
    markers: HashMap<String, MarkerNode>,
}

impl ThreatLayer {
    /// Reconcile the layer with a new marker set
    fn apply(&mut self, threats: Vec<ThreatMarker>, now: f64) -> WidgetResult<()> {
        let diff = diff_markers(self.markers.keys().map(String::as_str), threats);
        if diff.is_empty() {
            return Ok(());
        }
        log::debug!(
            "Threat layer: {} removed, {} moved, {} new",
            diff.removed.len(),
            diff.updated.len(),
            diff.entered.len()
        );

        for ip in diff.removed {
            if let Some(node) = self.markers.remove(&ip) {
                node.group.remove();
            }
        }

        for marker in diff.updated {
            let target = self.projection.project(marker.lon, marker.lat);
            if let Some(node) = self.markers.get_mut(&marker.ip) {
                node.tween = node.tween.retarget(target, now, constants::MARKER_MOVE_MS);
                node.placed = false;
                *node.datum.borrow_mut() = marker;
            }
        }

        for marker in diff.entered {
            let ip = marker.ip.clone();
            let node = self.create(marker, now)?;
            self.markers.insert(ip, node);
        }
        Ok(())
    }

    fn create(&self, marker: ThreatMarker, now: f64) -> WidgetResult<MarkerNode> {
        let position = self.projection.project(marker.lon, marker.lat);
        let color = marker.color();

        let group = dom::svg_element(&self.document, "g")?;
        dom::set_attributes(&group, &[
            ("class", "threat".to_string()),
            ("data-ip", marker.ip.clone()),
            ("transform", translate(position)),
        ])?;

        let dot = dom::svg_element(&self.document, "circle")?;
        dom::set_attributes(&dot, &[
            ("r", constants::MARKER_RADIUS.to_string()),
            ("fill", color.to_string()),
            ("opacity", constants::MARKER_OPACITY.to_string()),
        ])?;

        let ring = dom::svg_element(&self.document, "circle")?;
        dom::set_attributes(&ring, &[
            ("r", constants::PULSE_START_RADIUS.to_string()),
            ("fill", "none".to_string()),
            ("stroke", color.to_string()),
            ("stroke-width", constants::PULSE_STROKE_WIDTH.to_string()),
            ("opacity", constants::PULSE_START_OPACITY.to_string()),
        ])?;

        group.append_child(&dot)?;
        group.append_child(&ring)?;

        let datum = Rc::new(RefCell::new(marker));
        let on_click = {
            let datum = datum.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                if let Err(e) = modal::open(&datum.borrow()) {
                    log::warn!("Could not open marker dialog: {}", e);
                }
            })
        };
        group.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        self.layer.append_child(&group)?;

        Ok(MarkerNode {
            group,
            ring,
            datum,
            tween: Tween::settled(position),
            born_ms: now,
            placed: true,
            _on_click: on_click,
        })
    }

    /// Advance tweens and pulse rings to `now`
    fn animate(&mut self, now: f64) -> WidgetResult<()> {
        for node in self.markers.values_mut() {
            if !node.placed {
                node.group.set_attribute("transform", &translate(node.tween.position(now)))?;
                node.placed = node.tween.is_settled(now);
            }
            let pulse = pulse_at(now - node.born_ms);
            node.ring.set_attribute("r", &pulse.radius.to_string())?;
            node.ring.set_attribute("opacity", &pulse.opacity.to_string())?;
        }
        Ok(())
    }
}

// ============================================================================
// MAP STATE
// ============================================================================

/// Browser hooks that must go away with the map
#[derive(Default)]
struct MapBindings {
    listeners: Vec<Listener>,
    interval: Option<Interval>,
}

struct MapState {
    svg: Element,
    endpoint: String,
    guard: RefreshGuard,
    layer: Option<ThreatLayer>,
    bindings: Attachment<MapBindings>,
}

type SharedMap = Rc<RefCell<MapState>>;

/// Mount the map into the page's `#threat-map`, if present
pub fn mount_on_page(config: &DashboardConfig) -> WidgetResult<()> {
    match dom::by_id(constants::THREAT_MAP_ID) {
        Some(container) => mount(&container, config),
        None => {
            log::debug!("No #{} on page, threat map disabled", constants::THREAT_MAP_ID);
            Ok(())
        }
    }
}

/// Replace `container`'s contents with a threat map
pub fn mount(container: &Element, config: &DashboardConfig) -> WidgetResult<()> {
    let document = dom::document()?;
    container.set_inner_html("");

    let width = container.client_width().max(0) as f64;
    let height = config.map_height as f64;

    let svg = dom::svg_element(&document, "svg")?;
    svg.set_id(constants::WORLD_MAP_SVG_ID);
    dom::set_attributes(&svg, &[("width", width.to_string()), ("height", height.to_string())])?;
    container.append_child(&svg)?;

    let background = dom::svg_element(&document, "rect")?;
    dom::set_attributes(&background, &[
        ("width", width.to_string()),
        ("height", height.to_string()),
        ("fill", constants::MAP_BACKGROUND.to_string()),
    ])?;
    svg.append_child(&background)?;

    let state: SharedMap = Rc::new(RefCell::new(MapState {
        svg: svg.clone(),
        endpoint: config.threat_endpoint.clone(),
        guard: RefreshGuard::new(config.initial_mode()),
        layer: None,
        bindings: Attachment::new(MapBindings::default()),
    }));

    let mut listeners = bind_mode_buttons(&state)?;
    listeners.push(Listener::on_window("resize", |_| {
        let reloaded = dom::window().and_then(|w| Ok(w.location().reload()?));
        if let Err(e) = reloaded {
            log::warn!("Page reload on resize failed: {}", e);
        }
    })?);
    if let Some(bindings) = state.borrow_mut().bindings.get_mut() {
        bindings.listeners = listeners;
    }

    start_animation(state.clone())?;

    let projection = Mercator::for_viewport(width, height);
    let atlas_url = config.world_atlas_url.clone();
    let refresh_ms = config.refresh_interval_ms;
    spawn_local(async move {
        if let Err(e) = load_world(&state, &document, projection, &atlas_url, refresh_ms).await {
            // map stays blank
            log::warn!("World map unavailable: {}", e);
        }
    });

    Ok(())
}

async fn load_world(
    state: &SharedMap,
    document: &Document,
    projection: Mercator,
    atlas_url: &str,
    refresh_ms: u32,
) -> WidgetResult<()> {
    let topology: Topology = fetch::get_json(atlas_url).await?;
    let features = topology.features(constants::WORLD_ATLAS_OBJECT)?;

    let svg = state.borrow().svg.clone();
    if !svg.is_connected() {
        return Ok(());
    }

    let countries = dom::svg_element(document, "g")?;
    for feature in &features {
        let d = feature_path(feature, &projection);
        if d.is_empty() {
            continue;
        }
        let path = dom::svg_element(document, "path")?;
        dom::set_attributes(&path, &[
            ("d", d),
            ("fill", constants::COUNTRY_FILL.to_string()),
            ("stroke", constants::COUNTRY_STROKE.to_string()),
            ("stroke-width", constants::COUNTRY_STROKE_WIDTH.to_string()),
            ("opacity", constants::COUNTRY_OPACITY.to_string()),
        ])?;
        countries.append_child(&path)?;
    }
    svg.append_child(&countries)?;

    let layer = dom::svg_element(document, "g")?;
    layer.set_id(constants::THREAT_LAYER_ID);
    svg.append_child(&layer)?;
    log::info!("World map drawn: {} countries", features.len());

    state.borrow_mut().layer = Some(ThreatLayer {
        document: document.clone(),
        layer,
        projection,
        markers: HashMap::new(),
    });

    refresh(state);

    let interval = {
        let state = state.clone();
        Interval::new(refresh_ms, move || refresh(&state))?
    };
    if let Some(bindings) = state.borrow_mut().bindings.get_mut() {
        bindings.interval = Some(interval);
    }
    Ok(())
}

fn start_animation(state: SharedMap) -> WidgetResult<()> {
    dom::frame::run(move |now: f64| {
        let mut guard = state.borrow_mut();
        let s = &mut *guard;
        if s.bindings.check(s.svg.is_connected()) == Tick::Stop {
            log::debug!("Threat map detached, released refresh and listeners");
            s.layer.take();
            return Tick::Stop;
        }
        if let Some(layer) = s.layer.as_mut() {
            if let Err(e) = layer.animate(now) {
                log::warn!("Marker animation failed: {}", e);
                s.bindings.check(false);
                return Tick::Stop;
            }
        }
        Tick::Continue
    })
}

// ============================================================================
// DATA
// ============================================================================

/// Start one refresh for the current mode
fn refresh(state: &SharedMap) {
    let (token, endpoint) = {
        let s = state.borrow();
        if s.layer.is_none() || s.bindings.is_released() {
            return;
        }
        (s.guard.begin(), s.endpoint.clone())
    };

    match token.mode() {
        DataMode::Demo => render(state, token, demo_threats()),
        DataMode::Live => {
            let state = state.clone();
            spawn_local(async move {
                let result = fetch::get_json::<Vec<ThreatMarker>>(&endpoint).await;
                render(&state, token, select_threats(result));
            });
        }
    }
}

fn render(state: &SharedMap, token: RefreshToken, threats: Vec<ThreatMarker>) {
    let mut s = state.borrow_mut();
    if !s.guard.is_current(&token) {
        log::debug!("Discarding stale {} refresh", token.mode().as_str());
        return;
    }
    let now = dom::now_ms();
    if let Some(layer) = s.layer.as_mut() {
        if let Err(e) = layer.apply(threats, now) {
            log::warn!("Threat layer update failed: {}", e);
        }
    }
}

/// Live/Demo buttons; the `active` class starts on the current mode
fn bind_mode_buttons(state: &SharedMap) -> WidgetResult<Vec<Listener>> {
    let (Some(live), Some(demo)) = (dom::by_id(DataMode::Live.button_id()), dom::by_id(DataMode::Demo.button_id())) else {
        return Ok(Vec::new());
    };

    let initial = state.borrow().guard.mode();
    let buttons = [
        (DataMode::Live, live.clone(), demo.clone()),
        (DataMode::Demo, demo, live),
    ];

    let mut listeners = Vec::with_capacity(buttons.len());
    for (mode, clicked, other) in buttons {
        if mode == initial {
            mark_active(&clicked, &other);
        }
        let state = state.clone();
        let target = clicked.clone();
        listeners.push(Listener::new(target.as_ref(), "click", move |_| {
            mark_active(&clicked, &other);
            state.borrow_mut().guard.set_mode(mode);
            log::debug!("Threat map mode: {}", mode.as_str());
            refresh(&state);
        })?);
    }
    Ok(listeners)
}

fn mark_active(active: &Element, inactive: &Element) {
    let result = active
        .class_list()
        .add_1(constants::ACTIVE_CLASS)
        .and_then(|_| inactive.class_list().remove_1(constants::ACTIVE_CLASS));
    if let Err(e) = result {
        log::warn!("Could not update mode buttons: {:?}", e);
    }
}
