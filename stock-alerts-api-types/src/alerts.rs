use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// One computed indicator snapshot for a ticker, as served by `/stock-alerts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub moving_averages: MovingAverages,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub signal: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub adx: Option<f64>,
    #[serde(default, rename = "+di")]
    pub plus_di: Option<f64>,
    #[serde(default, rename = "-di")]
    pub minus_di: Option<f64>,
    #[serde(default)]
    pub highlighted: bool,
}

impl AlertRecord {
    /// The price if it is present and a number. Records without one are never displayed.
    pub fn price(&self) -> Option<f64> {
        self.current_price.filter(|price| !price.is_nan())
    }
}

/// A single "price is below the N-day average" row. The backend emits one per
/// (symbol, period) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodAlertRecord {
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    pub period: String,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub difference: Option<f64>,
    #[serde(default)]
    pub percentage_change: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    /// Period label exactly as keyed in the payload, e.g. `"50"`.
    pub period: String,
    pub value: Option<f64>,
}

/// Moving averages keyed by period label.
///
/// Serialized as a JSON object. Unlike a hash map the entries keep the order they
/// had in the document, which is also the order they are displayed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovingAverages(pub Vec<MovingAverage>);

impl MovingAverages {
    pub fn iter(&self) -> impl Iterator<Item = &MovingAverage> {
        self.0.iter()
    }

    /// Every average that carries a number.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0
            .iter()
            .filter_map(|average| average.value)
            .filter(|value| !value.is_nan())
    }
}

impl<K, const N: usize> From<[(K, f64); N]> for MovingAverages
where
    K: Into<String>,
{
    fn from(entries: [(K, f64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(period, value)| MovingAverage {
                    period: period.into(),
                    value: Some(value),
                })
                .collect(),
        )
    }
}

impl Serialize for MovingAverages {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for average in &self.0 {
            map.serialize_entry(&average.period, &average.value)?;
        }
        map.end()
    }
}

struct MovingAveragesVisitor;

impl<'de> Visitor<'de> for MovingAveragesVisitor {
    type Value = MovingAverages;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map of period label to average")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut averages = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((period, value)) = access.next_entry::<String, Option<f64>>()? {
            averages.push(MovingAverage { period, value });
        }
        Ok(MovingAverages(averages))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MovingAverages::default())
    }
}

impl<'de> Deserialize<'de> for MovingAverages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MovingAveragesVisitor)
    }
}
