//! Validation for query coordinates and region envelopes.

use crate::error::{Result, TzError};
use tzlocate_types::coordinate::LatLng;
use tzlocate_types::envelope::Envelope;

/// Validates that both components of a query coordinate are finite.
///
/// # Examples
///
/// ```
/// use tzlocate::compute::validation::validate_finite;
/// use tzlocate::LatLng;
///
/// assert!(validate_finite(&LatLng::new(40.7, -74.0)).is_ok());
/// assert!(validate_finite(&LatLng::new(f64::NAN, -74.0)).is_err());
/// ```
pub fn validate_finite(coord: &LatLng) -> Result<()> {
    if !coord.latitude.is_finite() {
        return Err(TzError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            coord.latitude
        )));
    }

    if !coord.longitude.is_finite() {
        return Err(TzError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            coord.longitude
        )));
    }

    Ok(())
}

/// Validates a coordinate has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use tzlocate::compute::validation::validate_geographic;
/// use tzlocate::LatLng;
///
/// assert!(validate_geographic(&LatLng::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_geographic(&LatLng::new(40.0, 200.0)).is_err());
/// assert!(validate_geographic(&LatLng::new(95.0, -74.0)).is_err());
/// ```
pub fn validate_geographic(coord: &LatLng) -> Result<()> {
    validate_finite(coord)?;

    if !(-180.0..=180.0).contains(&coord.longitude) {
        return Err(TzError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            coord.longitude
        )));
    }

    if !(-90.0..=90.0).contains(&coord.latitude) {
        return Err(TzError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            coord.latitude
        )));
    }

    Ok(())
}

/// Validates an envelope supplied for, or computed from, a region.
pub fn validate_envelope(zone_id: &str, envelope: &Envelope) -> Result<()> {
    if envelope.is_valid() {
        Ok(())
    } else {
        Err(TzError::InvalidEnvelope {
            zone_id: zone_id.to_string(),
            envelope: *envelope,
        })
    }
}

/// Validates a zone identifier and returns it trimmed.
pub fn validate_zone_id(zone_id: &str) -> Result<&str> {
    let trimmed = zone_id.trim();
    if trimmed.is_empty() {
        return Err(TzError::MissingZoneId);
    }
    Ok(trimmed)
}
