//! DOM adapter
//!
//! Translates controller frames into DOM mutations and control clicks into
//! controller calls. This is the only module that touches `web_sys`.

pub mod styles;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

use crate::config::PageConfig;
use crate::controller::{Frame, SongPage};
use crate::errors::{PageError, Result};
use crate::interop::to_json_lossy;
use crate::models::{HostData, TrackKey};
use crate::renderers::{ControlView, LyricsView, VerseBlock};

/// Set on `<html>` once listeners are attached
const MOUNT_MARKER: &str = "data-song-page-mounted";

/// Handle on the song page document
pub struct PageDom {
    document: Document,
    config: PageConfig,
}

impl PageDom {
    pub fn from_window(config: PageConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(PageError::NoBrowser("window"))?;
        let document = window.document().ok_or(PageError::NoBrowser("document"))?;
        Ok(Self { document, config })
    }

    /// Host payload from `window[global_name]`, defaults when unreadable
    pub fn host_data(&self) -> HostData {
        match self.read_host_value() {
            Ok(value) => HostData::from_value(&value),
            Err(e) => {
                log::warn!("{}; rendering with defaults", e);
                HostData::default()
            }
        }
    }

    fn read_host_value(&self) -> Result<Value> {
        let window = web_sys::window().ok_or(PageError::NoBrowser("window"))?;
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(&self.config.global_name))?;
        Ok(to_json_lossy(&raw, &self.config.global_name))
    }

    /// Every toggle control on the page, in document order
    pub fn controls(&self) -> Result<Vec<HtmlElement>> {
        let nodes = self.document.query_selector_all(&self.config.control_selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    /// Raw track key of a control (`data-toggle`)
    pub fn control_key(&self, control: &HtmlElement) -> Option<String> {
        control.dataset().get(&self.config.toggle_attribute)
    }

    /// Apply a whole frame; failures are logged, not propagated
    pub fn apply(&self, frame: &Frame) {
        if let Err(e) = self.apply_controls(&frame.controls) {
            log::warn!("control update failed: {}", e);
        }
        if let Err(e) = self.apply_lyrics(&frame.lyrics) {
            log::warn!("lyrics update failed: {}", e);
        }
    }

    /// Replace the lyrics container's content with `view`
    ///
    /// Pages without the container are left untouched.
    pub fn apply_lyrics(&self, view: &LyricsView) -> Result<()> {
        let Some(container) = self.document.get_element_by_id(&self.config.container_id) else {
            log::debug!("no #{} on this page, skipping lyrics", self.config.container_id);
            return Ok(());
        };

        // build everything first so a failing call leaves the old content
        let children = match view {
            LyricsView::Placeholder { text } => {
                vec![self.element("p", styles::PLACEHOLDER, Some(text))?]
            }
            LyricsView::Blocks { blocks } => blocks
                .iter()
                .map(|block| self.block(block))
                .collect::<Result<Vec<_>>>()?,
        };

        container.set_text_content(None);
        for child in &children {
            container.append_child(child)?;
        }
        Ok(())
    }

    /// Sync every control on the page with its view
    ///
    /// Controls naming an unknown track are left alone.
    pub fn apply_controls(&self, views: &[ControlView]) -> Result<()> {
        for control in self.controls()? {
            let Some(key) = self
                .control_key(&control)
                .and_then(|raw| raw.parse::<TrackKey>().ok())
            else {
                continue;
            };
            let Some(view) = views.iter().find(|view| view.key == key) else {
                continue;
            };
            self.apply_control(&control, view)?;
        }
        Ok(())
    }

    fn apply_control(&self, control: &HtmlElement, view: &ControlView) -> Result<()> {
        control
            .class_list()
            .toggle_with_force(&self.config.active_class, view.active)?;
        // the template's own text (and any markup around it) stays put
        let current = control.text_content().unwrap_or_default();
        if current.trim() != view.label {
            control.set_text_content(Some(&view.label));
        }
        control.set_attribute("aria-pressed", if view.active { "true" } else { "false" })?;

        if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(view.disabled);
        } else if view.disabled {
            control.set_attribute("aria-disabled", "true")?;
        } else {
            control.remove_attribute("aria-disabled")?;
        }

        let (cursor, opacity) = styles::control_affordance(view.disabled);
        let style = control.style();
        style.set_property("cursor", cursor)?;
        style.set_property("opacity", opacity)?;
        Ok(())
    }

    fn block(&self, block: &VerseBlock) -> Result<Element> {
        let root = self.element("div", styles::block(block.shape), None)?;
        root.set_id(&block.anchor);

        if let Some(label) = &block.label {
            let label_el = self.element("div", styles::BLOCK_LABEL, Some(label))?;
            root.append_child(&label_el)?;
        }

        for track in &block.tracks {
            let group = self.element("div", styles::track_group(block.shape), None)?;
            group.set_attribute("data-track", track.track.as_str())?;
            for line in &track.lines {
                let line_el = self.element("p", styles::track_line(track.track), Some(line))?;
                group.append_child(&line_el)?;
            }
            root.append_child(&group)?;
        }

        Ok(root)
    }

    fn element(&self, tag: &str, class: &str, text: Option<&str>) -> Result<Element> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        if text.is_some() {
            element.set_text_content(text);
        }
        Ok(element)
    }
}

/// Mount the song page once the document is parsed
pub fn mount(config: PageConfig) -> Result<()> {
    let dom = PageDom::from_window(config)?;

    if dom.document.ready_state() == "loading" {
        let document = dom.document.clone();
        let on_ready = Closure::<dyn FnMut()>::once(move || {
            if let Err(e) = start(dom) {
                log::error!("song page mount failed: {}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        return Ok(());
    }

    start(dom)
}

fn start(dom: PageDom) -> Result<()> {
    let root = dom
        .document
        .document_element()
        .ok_or_else(|| PageError::MissingElement("<html>".to_string()))?;
    if root.has_attribute(MOUNT_MARKER) {
        log::info!("song page already mounted");
        return Ok(());
    }
    root.set_attribute(MOUNT_MARKER, "")?;

    let controls = dom.controls()?;
    let keys = controls
        .iter()
        .filter_map(|control| dom.control_key(control))
        .filter_map(|raw| match raw.parse::<TrackKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                log::warn!("control ignored: {}", e);
                None
            }
        })
        .collect();

    let template_labels: Vec<(TrackKey, String)> = controls
        .iter()
        .filter_map(|control| {
            let key = dom.control_key(control)?.parse::<TrackKey>().ok()?;
            Some((key, control.text_content()?))
        })
        .collect();
    let data = dom.host_data().with_template_labels(template_labels);

    let page = SongPage::new(data, keys, dom.config.clone());
    dom.apply(&page.initial_frame());

    let dom = Rc::new(dom);
    let page = Rc::new(RefCell::new(page));

    for control in controls {
        let dom = Rc::clone(&dom);
        let page = Rc::clone(&page);
        let target = control.clone();

        // listeners live as long as the page
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let raw = dom.control_key(&target).unwrap_or_default();
            let frame = page.borrow_mut().handle_toggle_raw(&raw);
            dom.apply(&frame);
        });
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    log::info!("song page mounted");
    Ok(())
}
