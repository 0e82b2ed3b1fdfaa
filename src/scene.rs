//! Scene files: named element boxes and the tooltips attached to them
//!
//! A scene stands in for a browser page. It is loaded from TOML, and it
//! implements [`TooltipHost`] in memory so tooltips can be attached and hovered
//! without a real DOM.
//!
//! ```toml
//! [metadata]
//! name = "toolbar"
//!
//! [elements.save]
//! x = 60
//! y = 80
//! width = 80
//! height = 40
//! padding = { top = 2, right = 4, bottom = 2, left = 4 }
//!
//! [[tooltips]]
//! anchor = "save"
//! width = 60
//! height = 20
//! angle = 45
//! html = "<p>Save</p>"
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::error::TooltipError;
use crate::orbit::config::RawOrbitConfig;
use crate::orbit::{BoxEdges, OrbitConfig, OrbitError, Point, Rect};
use crate::tooltip::{OrbitalTooltip, TooltipHost, TooltipOptions};

/// Errors that can occur when loading a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("tooltip anchor '{name}' is not a declared element{}", format_suggestions(.suggestions))]
    UnknownElement {
        name: String,
        suggestions: Vec<String>,
    },
    #[error("tooltip for '{anchor}' is misconfigured: {source}")]
    Orbit {
        anchor: String,
        #[source]
        source: OrbitError,
    },
    #[error("'{element}' has an invalid {field}: {value}")]
    InvalidGeometry {
        element: String,
        field: &'static str,
        value: f64,
    },
    #[error("'{anchor}' already has a tooltip; an anchor can carry only one")]
    DuplicateTooltip { anchor: String },
}

/// A tooltip declared in a scene, validated
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBinding {
    pub anchor: String,
    /// Box of the tooltip element; its position is irrelevant until placed
    pub size: Rect,
    pub options: TooltipOptions,
}

/// Whether a tooltip element is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// A tooltip element living in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipElement {
    pub class: String,
    pub html: String,
    pub visibility: Visibility,
}

/// An in-memory page
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: Option<String>,
    pub description: Option<String>,
    elements: HashMap<String, Rect>,
    bindings: Vec<TooltipBinding>,
    tooltips: HashMap<String, TooltipElement>,
}

#[derive(Deserialize)]
struct TomlScene {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    elements: HashMap<String, Rect>,
    #[serde(default)]
    tooltips: Vec<TomlTooltip>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlTooltip {
    anchor: String,
    width: f64,
    height: f64,
    #[serde(default)]
    padding: BoxEdges,
    #[serde(default)]
    border: BoxEdges,
    #[serde(flatten)]
    orbit: RawOrbitConfig,
    class: Option<String>,
    html: Option<String>,
    /// Fade duration in milliseconds
    fade: Option<u64>,
}

impl TomlTooltip {
    fn into_binding(self) -> Result<TooltipBinding, SceneError> {
        let orbit = OrbitConfig::try_from(self.orbit).map_err(|source| SceneError::Orbit {
            anchor: self.anchor.clone(),
            source,
        })?;

        let size = Rect::sized(self.width, self.height)
            .with_padding(self.padding)
            .with_border(self.border);
        check_geometry(&OrbitalTooltip::tooltip_id_for(&self.anchor), &size)?;

        let mut options = TooltipOptions::default().with_orbit(orbit);
        if let Some(class) = self.class {
            options = options.with_class(class);
        }
        if let Some(html) = self.html {
            options = options.with_html(html);
        }
        if let Some(fade) = self.fade {
            options = options.with_fade(Duration::from_millis(fade));
        }

        Ok(TooltipBinding {
            anchor: self.anchor,
            size,
            options,
        })
    }
}

/// Page coordinates must be finite; sizes, padding and borders finite and
/// non-negative
fn check_geometry(element: &str, rect: &Rect) -> Result<(), SceneError> {
    let positions = [("x", rect.page_x), ("y", rect.page_y)];
    let sizes = [
        ("width", rect.width),
        ("height", rect.height),
        ("padding.top", rect.padding.top),
        ("padding.right", rect.padding.right),
        ("padding.bottom", rect.padding.bottom),
        ("padding.left", rect.padding.left),
        ("border.top", rect.border.top),
        ("border.right", rect.border.right),
        ("border.bottom", rect.border.bottom),
        ("border.left", rect.border.left),
    ];

    let bad = positions
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .or_else(|| {
            sizes
                .into_iter()
                .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
        });

    match bad {
        Some((field, value)) => Err(SceneError::InvalidGeometry {
            element: element.to_string(),
            field,
            value,
        }),
        None => Ok(()),
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        // sorted so the reported element does not depend on hash order
        let mut names: Vec<&String> = parsed.elements.keys().collect();
        names.sort();
        for name in names {
            check_geometry(name, &parsed.elements[name])?;
        }

        let bindings = parsed
            .tooltips
            .into_iter()
            .map(TomlTooltip::into_binding)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for binding in &bindings {
            if !seen.insert(binding.anchor.as_str()) {
                return Err(SceneError::DuplicateTooltip {
                    anchor: binding.anchor.clone(),
                });
            }
            if !parsed.elements.contains_key(&binding.anchor) {
                return Err(SceneError::UnknownElement {
                    name: binding.anchor.clone(),
                    suggestions: find_similar(parsed.elements.keys(), &binding.anchor, 2),
                });
            }
        }

        Ok(Scene {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            elements: parsed.elements,
            bindings,
            tooltips: HashMap::new(),
        })
    }

    pub fn bindings(&self) -> &[TooltipBinding] {
        &self.bindings
    }

    /// Current box of an element, if declared or created
    pub fn element(&self, id: &str) -> Option<&Rect> {
        self.elements.get(id)
    }

    /// State of a tooltip element created by [`TooltipHost::insert_tooltip`]
    pub fn tooltip(&self, id: &str) -> Option<&TooltipElement> {
        self.tooltips.get(id)
    }

    /// Attach every declared tooltip, in declaration order
    pub fn attach_all(&mut self) -> Result<Vec<OrbitalTooltip>, TooltipError> {
        let bindings = self.bindings.clone();
        bindings
            .into_iter()
            .map(|binding| OrbitalTooltip::attach(&mut *self, binding.anchor, binding.options))
            .collect()
    }

    fn tooltip_mut(&mut self, id: &str) -> Result<&mut TooltipElement, TooltipError> {
        self.tooltips
            .get_mut(id)
            .ok_or_else(|| TooltipError::host(id, "not a tooltip element"))
    }
}

impl TooltipHost for Scene {
    fn measure(&self, element: &str) -> Result<Rect, TooltipError> {
        self.elements.get(element).copied().ok_or_else(|| {
            TooltipError::unknown_element(element, find_similar(self.elements.keys(), element, 2))
        })
    }

    fn insert_tooltip(
        &mut self,
        element: &str,
        class: &str,
        html: &str,
    ) -> Result<(), TooltipError> {
        let size = self
            .bindings
            .iter()
            .find(|b| OrbitalTooltip::tooltip_id_for(&b.anchor) == element)
            .map(|b| b.size)
            .ok_or_else(|| TooltipError::host(element, "no tooltip declared for this element"))?;

        self.elements.insert(element.to_string(), size);
        self.tooltips.insert(
            element.to_string(),
            TooltipElement {
                class: class.to_string(),
                html: html.to_string(),
                visibility: Visibility::Hidden,
            },
        );
        Ok(())
    }

    fn move_to(&mut self, element: &str, position: Point) -> Result<(), TooltipError> {
        let rect = self
            .elements
            .get_mut(element)
            .ok_or_else(|| TooltipError::unknown_element(element, vec![]))?;
        rect.page_x = position.x;
        rect.page_y = position.y;
        Ok(())
    }

    fn reveal(&mut self, element: &str, _fade: Duration) -> Result<(), TooltipError> {
        self.tooltip_mut(element)?.visibility = Visibility::Visible;
        Ok(())
    }

    fn hide(&mut self, element: &str, _fade: Duration) -> Result<(), TooltipError> {
        self.tooltip_mut(element)?.visibility = Visibility::Hidden;
        Ok(())
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    // single rolling row: prev[j] is the distance between a[..i] and b[..j]
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Find declared names within a maximum edit distance, closest first
fn find_similar<'a>(
    names: impl Iterator<Item = &'a String>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut candidates: Vec<(String, usize)> = names
        .collect::<HashSet<_>>()
        .into_iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            (dist <= max_distance && dist > 0).then(|| (name.clone(), dist))
        })
        .collect();

    candidates.sort_by(|(a, da), (b, db)| da.cmp(db).then_with(|| a.cmp(b)));
    candidates
        .into_iter()
        .map(|(name, _)| name)
        .take(3)
        .collect()
}
