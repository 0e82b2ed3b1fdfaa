//! Binding a tooltip to an anchor element on a host page
//!
//! The host owns the elements: it measures them, moves them and runs the
//! fade transitions. [`OrbitalTooltip`] only decides where the tooltip goes
//! and in which order to ask the host for things.

use std::time::Duration;

use tracing::debug;

use crate::error::TooltipError;
use crate::orbit::{plan_placement, OrbitConfig, Placement, Point, Rect};

/// Everything the engine needs from the page hosting the anchor
pub trait TooltipHost {
    /// Current box of an element
    fn measure(&self, element: &str) -> Result<Rect, TooltipError>;

    /// Add a hidden tooltip element to the page
    fn insert_tooltip(&mut self, element: &str, class: &str, html: &str)
        -> Result<(), TooltipError>;

    /// Put an element's top-left corner at an absolute page position
    fn move_to(&mut self, element: &str, position: Point) -> Result<(), TooltipError>;

    /// Fade an element in, finishing any transition still running on it
    fn reveal(&mut self, element: &str, fade: Duration) -> Result<(), TooltipError>;

    /// Fade an element out
    fn hide(&mut self, element: &str, fade: Duration) -> Result<(), TooltipError>;
}

/// Presentation and placement options for one tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    /// Where the tooltip orbits
    pub orbit: OrbitConfig,
    /// CSS class given to the tooltip element
    pub class: String,
    /// Markup inside the tooltip
    pub html: String,
    /// Duration of the reveal and hide fades
    pub fade: Duration,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            class: "orbitaltooltip-default-bottom".to_string(),
            html: "<p>sample text</p>".to_string(),
            fade: Duration::from_millis(200),
        }
    }
}

impl TooltipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }
}

/// A tooltip attached to an anchor element
#[derive(Debug, Clone)]
pub struct OrbitalTooltip {
    anchor: String,
    tooltip: String,
    options: TooltipOptions,
}

impl OrbitalTooltip {
    /// Id of the tooltip element created for an anchor
    pub fn tooltip_id_for(anchor: &str) -> String {
        format!("orbitalTip_{}", anchor)
    }

    /// Create the (hidden) tooltip element for `anchor`
    pub fn attach<H: TooltipHost>(
        host: &mut H,
        anchor: impl Into<String>,
        options: TooltipOptions,
    ) -> Result<Self, TooltipError> {
        let anchor = anchor.into();
        host.measure(&anchor)?;

        let tooltip = Self::tooltip_id_for(&anchor);
        host.insert_tooltip(&tooltip, &options.class, &options.html)?;
        debug!(anchor = %anchor, tooltip = %tooltip, "attached tooltip");

        Ok(Self {
            anchor,
            tooltip,
            options,
        })
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn tooltip_id(&self) -> &str {
        &self.tooltip
    }

    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    /// This tooltip's orbit moved to another angle.
    ///
    /// Spacing, offset and tracking are kept. An angle outside `[0, 360]`
    /// fails with [`TooltipError::Orbit`] naming the anchor.
    pub fn orbit_at(&self, angle_degrees: f64) -> Result<OrbitConfig, TooltipError> {
        self.options
            .orbit
            .with_angle(angle_degrees)
            .map_err(|source| TooltipError::orbit(&self.anchor, source))
    }

    /// Work out where the tooltip would go under `orbit`, without moving it
    pub fn place<H: TooltipHost>(
        &self,
        host: &H,
        orbit: &OrbitConfig,
    ) -> Result<Placement, TooltipError> {
        let anchor = host.measure(&self.anchor)?;
        let tooltip = host.measure(&self.tooltip)?;
        Ok(plan_placement(&anchor, &tooltip, orbit))
    }

    /// Pointer entered the anchor: position the tooltip and fade it in.
    ///
    /// Both boxes are measured again on every call, so a tooltip follows an
    /// anchor that moved since the last hover.
    pub fn hover_enter<H: TooltipHost>(&self, host: &mut H) -> Result<Point, TooltipError> {
        let position = self.place(host, &self.options.orbit)?.position;
        host.move_to(&self.tooltip, position)?;
        host.reveal(&self.tooltip, self.options.fade)?;
        Ok(position)
    }

    /// Pointer left the anchor: fade the tooltip out
    pub fn hover_leave<H: TooltipHost>(&self, host: &mut H) -> Result<(), TooltipError> {
        host.hide(&self.tooltip, self.options.fade)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::orbit::OrbitError;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Insert(String, String, String),
        Move(String, Point),
        Reveal(String, Duration),
        Hide(String, Duration),
    }

    #[derive(Default)]
    struct RecordingHost {
        rects: HashMap<String, Rect>,
        events: Vec<Event>,
    }

    impl TooltipHost for RecordingHost {
        fn measure(&self, element: &str) -> Result<Rect, TooltipError> {
            self.rects
                .get(element)
                .copied()
                .ok_or_else(|| TooltipError::unknown_element(element, vec![]))
        }

        fn insert_tooltip(
            &mut self,
            element: &str,
            class: &str,
            html: &str,
        ) -> Result<(), TooltipError> {
            self.rects
                .insert(element.to_string(), Rect::sized(60.0, 20.0));
            self.events.push(Event::Insert(
                element.to_string(),
                class.to_string(),
                html.to_string(),
            ));
            Ok(())
        }

        fn move_to(&mut self, element: &str, position: Point) -> Result<(), TooltipError> {
            self.events.push(Event::Move(element.to_string(), position));
            Ok(())
        }

        fn reveal(&mut self, element: &str, fade: Duration) -> Result<(), TooltipError> {
            self.events.push(Event::Reveal(element.to_string(), fade));
            Ok(())
        }

        fn hide(&mut self, element: &str, fade: Duration) -> Result<(), TooltipError> {
            self.events.push(Event::Hide(element.to_string(), fade));
            Ok(())
        }
    }

    fn host_with_button() -> RecordingHost {
        let mut host = RecordingHost::default();
        host.rects
            .insert("save".to_string(), Rect::new(60.0, 80.0, 80.0, 40.0));
        host
    }

    #[test]
    fn test_default_options() {
        let options = TooltipOptions::default();
        assert_eq!(options.orbit.angle_degrees(), 180.0);
        assert_eq!(options.orbit.spacing(), 5.0);
        assert_eq!(options.class, "orbitaltooltip-default-bottom");
        assert_eq!(options.html, "<p>sample text</p>");
        assert_eq!(options.fade, Duration::from_millis(200));
    }

    #[test]
    fn test_attach_inserts_hidden_tooltip() {
        let mut host = host_with_button();
        let options = TooltipOptions::new()
            .with_class("tip")
            .with_html("<p>Save</p>");
        let tooltip = OrbitalTooltip::attach(&mut host, "save", options).unwrap();

        assert_eq!(tooltip.tooltip_id(), "orbitalTip_save");
        assert_eq!(
            host.events,
            vec![Event::Insert(
                "orbitalTip_save".to_string(),
                "tip".to_string(),
                "<p>Save</p>".to_string()
            )]
        );
    }

    #[test]
    fn test_attach_to_missing_anchor_fails() {
        let mut host = RecordingHost::default();
        let result = OrbitalTooltip::attach(&mut host, "nope", TooltipOptions::default());
        assert!(matches!(result, Err(TooltipError::UnknownElement { .. })));
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_hover_moves_then_reveals() {
        let mut host = host_with_button();
        let tooltip = OrbitalTooltip::attach(&mut host, "save", TooltipOptions::default()).unwrap();
        host.events.clear();

        let position = tooltip.hover_enter(&mut host).unwrap();
        assert_eq!(position, Point::new(70.0, 125.0));

        tooltip.hover_leave(&mut host).unwrap();
        let fade = Duration::from_millis(200);
        assert_eq!(
            host.events,
            vec![
                Event::Move("orbitalTip_save".to_string(), position),
                Event::Reveal("orbitalTip_save".to_string(), fade),
                Event::Hide("orbitalTip_save".to_string(), fade),
            ]
        );
    }

    #[test]
    fn test_hover_follows_a_moved_anchor() {
        let mut host = host_with_button();
        let tooltip = OrbitalTooltip::attach(&mut host, "save", TooltipOptions::default()).unwrap();
        let first = tooltip.hover_enter(&mut host).unwrap();

        host.rects
            .insert("save".to_string(), Rect::new(160.0, 80.0, 80.0, 40.0));
        let second = tooltip.hover_enter(&mut host).unwrap();

        assert_eq!(second.x - first.x, 100.0);
        assert_eq!(second.y, first.y);
    }

    #[test]
    fn test_orbit_at_keeps_the_other_settings() {
        let mut host = host_with_button();
        let orbit = OrbitConfig::new(180.0, 9.0, 3.0).unwrap();
        let options = TooltipOptions::new().with_orbit(orbit);
        let tooltip = OrbitalTooltip::attach(&mut host, "save", options).unwrap();

        let moved = tooltip.orbit_at(90.0).unwrap();
        assert_eq!(moved.angle_degrees(), 90.0);
        assert_eq!(moved.spacing(), 9.0);
        assert_eq!(moved.offset(), 3.0);
    }

    #[test]
    fn test_orbit_at_rejects_bad_angle_with_anchor() {
        let mut host = host_with_button();
        let tooltip = OrbitalTooltip::attach(&mut host, "save", TooltipOptions::default()).unwrap();

        match tooltip.orbit_at(400.0) {
            Err(TooltipError::Orbit { anchor, source }) => {
                assert_eq!(anchor, "save");
                assert_eq!(source, OrbitError::angle_out_of_range(400.0));
            }
            other => panic!("expected an orbit error, got {:?}", other),
        }
    }

    #[test]
    fn test_place_does_not_touch_the_host() {
        let mut host = host_with_button();
        let tooltip = OrbitalTooltip::attach(&mut host, "save", TooltipOptions::default()).unwrap();
        host.events.clear();

        let orbit = OrbitConfig::new(0.0, 5.0, 0.0).unwrap();
        let placement = tooltip.place(&host, &orbit).unwrap();
        assert_eq!(placement.position, Point::new(70.0, 55.0));
        assert!(host.events.is_empty());
    }
}
