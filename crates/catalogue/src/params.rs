//! Parameter container holding the raw catalogue values of one entity.
//!
//! Known catalogue tags map onto the closed [`Field`] enum and are parsed into
//! unit-tagged quantities where the entity kind has a default unit for them.
//! Anything else is kept as text in an extension map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;
use units::{Angle, Quantity, Unit};

use crate::entity::EntityKind;

/// XML-style attributes attached to a catalogue value (`unit`, `type`,
/// `upperlimit`, `errorminus`, ...).
pub type Attributes = BTreeMap<String, String>;

/// Tags naming nested objects. They are structure, not parameters.
const STRUCTURAL_TAGS: [&str; 5] = ["system", "binary", "star", "planet", "moon"];

macro_rules! fields {
    ($($variant:ident => $tag:literal,)+) => {
        /// Catalogue tags with a known meaning.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The tag this field is stored under in the catalogue.
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Field::$variant => $tag,)+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Field> {
                match tag {
                    $($tag => Some(Field::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

fields! {
    Age => "age",
    AscendingNode => "ascendingnode",
    Albedo => "albedo",
    Declination => "declination",
    Description => "description",
    DiscoveryMethod => "discoverymethod",
    DiscoveryYear => "discoveryyear",
    Distance => "distance",
    Eccentricity => "eccentricity",
    Epoch => "epoch",
    Inclination => "inclination",
    IsTransiting => "istransiting",
    LastUpdate => "lastupdate",
    Longitude => "longitude",
    MagU => "magU",
    MagB => "magB",
    MagV => "magV",
    MagI => "magI",
    MagJ => "magJ",
    MagH => "magH",
    MagK => "magK",
    MagL => "magL",
    MagM => "magM",
    MagN => "magN",
    Mass => "mass",
    Metallicity => "metallicity",
    MolecularWeight => "molweight",
    Periastron => "periastron",
    Period => "period",
    Radius => "radius",
    RightAscension => "rightascension",
    SemiMajorAxis => "semimajoraxis",
    Separation => "separation",
    SpectralType => "spectraltype",
    Temperature => "temperature",
    TransitTime => "transittime",
}

impl Field {
    /// Field holding the apparent magnitude in `band`.
    pub fn magnitude(band: stellar::Band) -> Field {
        use stellar::Band;
        match band {
            Band::U => Field::MagU,
            Band::B => Field::MagB,
            Band::V => Field::MagV,
            Band::I => Field::MagI,
            Band::J => Field::MagJ,
            Band::H => Field::MagH,
            Band::K => Field::MagK,
            Band::L => Field::MagL,
            Band::M => Field::MagM,
            Band::N => Field::MagN,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Unit a field is parsed into for entities of `kind`, if it has one.
///
/// The base table applies to every kind. Each kind adds its own entries on
/// top and wins where both define a field.
pub fn default_unit(kind: EntityKind, field: Field) -> Option<Unit> {
    let specific = match kind {
        EntityKind::System => system_unit(field),
        EntityKind::Binary => binary_unit(field),
        EntityKind::Star => star_unit(field),
        EntityKind::Planet => planet_unit(field),
    };
    specific.or_else(|| base_unit(field))
}

fn base_unit(field: Field) -> Option<Unit> {
    match field {
        Field::Age => Some(Unit::Gigayear),
        Field::Distance => Some(Unit::Parsec),
        Field::MagB | Field::MagH | Field::MagI | Field::MagJ | Field::MagK | Field::MagV => {
            Some(Unit::Dimensionless)
        }
        Field::Temperature => Some(Unit::Kelvin),
        _ => None,
    }
}

fn system_unit(field: Field) -> Option<Unit> {
    match field {
        Field::Epoch => Some(Unit::JulianDate),
        _ => None,
    }
}

fn binary_unit(field: Field) -> Option<Unit> {
    match field {
        Field::Separation | Field::SemiMajorAxis => Some(Unit::AstronomicalUnit),
        Field::Periastron | Field::Inclination | Field::Longitude | Field::AscendingNode => {
            Some(Unit::Degree)
        }
        Field::Period => Some(Unit::Day),
        Field::Eccentricity => Some(Unit::Dimensionless),
        Field::TransitTime => Some(Unit::JulianDate),
        _ => None,
    }
}

fn star_unit(field: Field) -> Option<Unit> {
    match field {
        Field::Mass => Some(Unit::SolarMass),
        Field::Radius => Some(Unit::SolarRadius),
        Field::Metallicity => Some(Unit::Dimensionless),
        Field::MagU | Field::MagL | Field::MagM | Field::MagN => Some(Unit::Dimensionless),
        _ => None,
    }
}

fn planet_unit(field: Field) -> Option<Unit> {
    match field {
        Field::Mass => Some(Unit::JupiterMass),
        Field::Radius => Some(Unit::JupiterRadius),
        Field::DiscoveryYear | Field::Eccentricity | Field::Albedo => Some(Unit::Dimensionless),
        Field::Inclination | Field::Periastron | Field::Longitude | Field::AscendingNode => {
            Some(Unit::Degree)
        }
        Field::Period => Some(Unit::Day),
        Field::SemiMajorAxis | Field::Separation => Some(Unit::AstronomicalUnit),
        Field::TransitTime => Some(Unit::JulianDate),
        Field::MolecularWeight => Some(Unit::AtomicMassUnit),
        _ => None,
    }
}

/// A stored parameter: a unit-tagged number, or text that had no default
/// unit or failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Quantity(Quantity),
    Text(String),
}

impl Value {
    pub fn as_quantity(&self) -> Option<Quantity> {
        match self {
            Value::Quantity(quantity) => Some(*quantity),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Quantity(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Quantity(quantity) => write!(f, "{}", quantity),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        Value::Quantity(quantity)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    kind: EntityKind,
    name: Option<String>,
    alt_names: Vec<String>,
    list: Vec<String>,
    fields: BTreeMap<Field, Value>,
    extensions: BTreeMap<String, Value>,
}

impl Parameters {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            name: None,
            alt_names: Vec::new(),
            list: Vec::new(),
            fields: BTreeMap::new(),
            extensions: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Adds a raw catalogue value. Returns `false` when the value is rejected.
    ///
    /// - structural tags (`system`, `planet`, ...) are rejected
    /// - `separation` is only kept when its `unit` attribute is `AU`
    /// - a missing value falls back to the `upperlimit`, then `lowerlimit`
    ///   attribute
    /// - a repeated `name` becomes an alternate name, unless flagged
    ///   `type="pri"`, in which case it replaces the current name
    /// - `list` accumulates
    /// - any other repeated key is rejected, keeping the first value
    pub fn add_param(&mut self, key: &str, value: Option<&str>, attributes: &Attributes) -> bool {
        if STRUCTURAL_TAGS.contains(&key) {
            return false;
        }

        if key == Field::Separation.tag()
            && attributes.get("unit").map(String::as_str) != Some("AU")
        {
            return false;
        }

        if self.contains_key(key) {
            return self.add_duplicate(key, value, attributes);
        }

        let Some(text) = value.or_else(|| {
            attributes
                .get("upperlimit")
                .or_else(|| attributes.get("lowerlimit"))
                .map(String::as_str)
        }) else {
            return false;
        };

        match key {
            "name" => self.name = Some(text.to_string()),
            "list" => self.list.push(text.to_string()),
            _ => match Field::from_tag(key) {
                Some(field) => {
                    let parsed = self.parse_field(field, text);
                    self.fields.insert(field, parsed);
                }
                None => {
                    self.extensions
                        .insert(key.to_string(), Value::Text(text.to_string()));
                }
            },
        }
        true
    }

    /// [`Parameters::add_param`] with no attributes.
    pub fn add(&mut self, key: &str, value: &str) -> bool {
        self.add_param(key, Some(value), &Attributes::new())
    }

    fn contains_key(&self, key: &str) -> bool {
        match key {
            "name" => self.name.is_some(),
            // list is multi-valued, so it never counts as a duplicate
            "list" => !self.list.is_empty(),
            _ => match Field::from_tag(key) {
                Some(field) => self.fields.contains_key(&field),
                None => self.extensions.contains_key(key),
            },
        }
    }

    fn add_duplicate(&mut self, key: &str, value: Option<&str>, attributes: &Attributes) -> bool {
        match (key, value) {
            ("name", Some(value)) => {
                if attributes.get("type").map(String::as_str) == Some("pri") {
                    if let Some(old) = self.name.replace(value.to_string()) {
                        self.alt_names.push(old);
                    }
                } else {
                    self.alt_names.push(value.to_string());
                }
                true
            }
            ("list", Some(value)) => {
                self.list.push(value.to_string());
                true
            }
            _ => {
                warn!(
                    key,
                    value = value.unwrap_or_default(),
                    entity = self.name().unwrap_or("Unnamed"),
                    "rejected duplicate parameter"
                );
                false
            }
        }
    }

    fn parse_field(&self, field: Field, text: &str) -> Value {
        let parsed = match field {
            Field::RightAscension => Angle::parse_hours(text).map(Quantity::from),
            Field::Declination => Angle::parse_degrees(text).map(Quantity::from),
            _ => match default_unit(self.kind, field) {
                Some(unit) => Quantity::parse(text, unit),
                None => return Value::Text(text.to_string()),
            },
        };

        match parsed {
            Ok(quantity) => Value::Quantity(quantity),
            Err(err) => {
                warn!(
                    field = %field,
                    entity = self.name().unwrap_or("Unnamed"),
                    %err,
                    "storing unconverted value"
                );
                Value::Text(text.to_string())
            }
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    /// The canonical name followed by every alternate name.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.name
            .as_deref()
            .into_iter()
            .chain(self.alt_names.iter().map(String::as_str))
    }

    pub fn list(&self) -> &[String] {
        &self.list
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.fields.get(&field)
    }

    pub fn quantity(&self, field: Field) -> Option<Quantity> {
        self.get(field).and_then(Value::as_quantity)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    /// The field converted to a typed unit. Text values and values of the
    /// wrong dimension read as missing.
    pub fn typed<T: TryFrom<Quantity>>(&self, field: Field) -> Option<T> {
        let quantity = self.quantity(field)?;
        T::try_from(quantity).ok()
    }

    /// A dimensionless field as a plain number.
    pub fn number(&self, field: Field) -> Option<f64> {
        self.quantity(field)?.as_dimensionless().ok()
    }

    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn extensions(&self) -> &BTreeMap<String, Value> {
        &self.extensions
    }

    /// Sets a field directly, replacing any existing value.
    pub fn set(&mut self, field: Field, value: impl Into<Value>) {
        self.fields.insert(field, value.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<Value> {
        self.fields.remove(&field)
    }

    /// Number of stored values, counting each name and list entry.
    pub fn len(&self) -> usize {
        usize::from(self.name.is_some())
            + self.alt_names.len()
            + self.list.len()
            + self.fields.len()
            + self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
