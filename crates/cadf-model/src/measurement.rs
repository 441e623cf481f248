// measurement.rs — Metric and measurement value objects.
//
// A measurement pairs a result with the metric that produced it. The
// metric is referenced either by id or inline as a full Metric value —
// exactly one of the two, never both, never neither. The conflicting
// setter fails immediately; `build()` re-checks the exclusive-or.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_text, required, ValidationError};
use crate::resource::Resource;

/// A measurement with its result type erased for storage on an audit
/// event.
pub type AnyMeasurement = Measurement<serde_json::Value>;

/// A named, unit-bearing metric definition (e.g. "Response Time in
/// Milliseconds").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    metric_id: String,

    /// The metric's unit, e.g. "msec.", "Hz", "GB".
    unit: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Metric {
    pub fn builder() -> MetricBuilder {
        MetricBuilder::default()
    }

    pub fn metric_id(&self) -> &str {
        &self.metric_id
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Builder for [`Metric`]. `metric_id` and `unit` are required.
#[derive(Debug, Default)]
pub struct MetricBuilder {
    metric_id: Option<String>,
    unit: Option<String>,
    name: Option<String>,
}

impl MetricBuilder {
    pub fn metric_id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_text("metricId", &id)?;
        self.metric_id = Some(id);
        Ok(self)
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Result<Self, ValidationError> {
        let unit = unit.into();
        ensure_text("metric unit", &unit)?;
        self.unit = Some(unit);
        Ok(self)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<Metric, ValidationError> {
        Ok(Metric {
            metric_id: required("metricId", self.metric_id)?,
            unit: required("metric unit", self.unit)?,
            name: self.name,
        })
    }
}

/// The quantitative or qualitative result of applying a metric.
///
/// The result is generic: boolean, numeric, a scalar from an enumeration,
/// or a more complex serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement<T> {
    result: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    metric_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<Metric>,

    #[serde(skip_serializing_if = "Option::is_none")]
    calculated_by_id: Option<String>,

    /// The resource that calculated the measurement, when it is not the
    /// event's initiator.
    #[serde(skip_serializing_if = "Option::is_none")]
    calculated_by: Option<Resource>,
}

impl<T> Measurement<T> {
    pub fn builder() -> MeasurementBuilder<T> {
        MeasurementBuilder::default()
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    pub fn metric_id(&self) -> Option<&str> {
        self.metric_id.as_deref()
    }

    pub fn metric(&self) -> Option<&Metric> {
        self.metric.as_ref()
    }

    pub fn calculated_by_id(&self) -> Option<&str> {
        self.calculated_by_id.as_deref()
    }

    pub fn calculated_by(&self) -> Option<&Resource> {
        self.calculated_by.as_ref()
    }
}

impl<T: Serialize> Measurement<T> {
    /// Erase the result type for storage on an audit event.
    pub fn into_any(self) -> Result<AnyMeasurement, ValidationError> {
        let result = serde_json::to_value(self.result).map_err(|source| {
            ValidationError::Serialization {
                field: "measurement result",
                source,
            }
        })?;
        Ok(Measurement {
            result,
            metric_id: self.metric_id,
            metric: self.metric,
            calculated_by_id: self.calculated_by_id,
            calculated_by: self.calculated_by,
        })
    }
}

/// Builder for [`Measurement`].
#[derive(Debug)]
pub struct MeasurementBuilder<T> {
    result: Option<T>,
    metric_id: Option<String>,
    metric: Option<Metric>,
    calculated_by_id: Option<String>,
    calculated_by: Option<Resource>,
}

// Derived Default would require T: Default.
impl<T> Default for MeasurementBuilder<T> {
    fn default() -> Self {
        Self {
            result: None,
            metric_id: None,
            metric: None,
            calculated_by_id: None,
            calculated_by: None,
        }
    }
}

impl<T> MeasurementBuilder<T> {
    pub fn result(mut self, result: T) -> Self {
        self.result = Some(result);
        self
    }

    /// Reference the metric by identifier. Conflicts with
    /// [`MeasurementBuilder::metric`].
    pub fn metric_id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_text("metricId", &id)?;
        if self.metric.is_some() {
            return Err(ValidationError::ExactlyOne {
                left: "metricId",
                right: "metric",
            });
        }
        self.metric_id = Some(id);
        Ok(self)
    }

    /// Embed the full metric value. Conflicts with
    /// [`MeasurementBuilder::metric_id`].
    pub fn metric(mut self, metric: Metric) -> Result<Self, ValidationError> {
        if self.metric_id.is_some() {
            return Err(ValidationError::ExactlyOne {
                left: "metricId",
                right: "metric",
            });
        }
        self.metric = Some(metric);
        Ok(self)
    }

    pub fn calculated_by_id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_text("calculatedById", &id)?;
        self.calculated_by_id = Some(id);
        Ok(self)
    }

    pub fn calculated_by(mut self, resource: Resource) -> Self {
        self.calculated_by = Some(resource);
        self
    }

    pub fn build(self) -> Result<Measurement<T>, ValidationError> {
        let result = required("measurement result", self.result)?;
        if self.metric_id.is_some() == self.metric.is_some() {
            return Err(ValidationError::ExactlyOne {
                left: "metricId",
                right: "metric",
            });
        }
        Ok(Measurement {
            result,
            metric_id: self.metric_id,
            metric: self.metric,
            calculated_by_id: self.calculated_by_id,
            calculated_by: self.calculated_by,
        })
    }
}
