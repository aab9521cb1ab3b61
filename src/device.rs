//! Target devices and the default device catalog.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::orientation::Viewport;

/// A target device: natural viewport, supported pixel densities, and
/// whether it can be rotated.
///
/// # Example
///
/// ```
/// use zensizes::Device;
///
/// let phone = Device::new(390, 844, vec![3.0]).rotatable();
/// assert_eq!(phone.viewports().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    /// Natural viewport width in CSS pixels.
    pub width: u32,
    /// Natural viewport height in CSS pixels.
    pub height: u32,
    /// Device pixel ratios, in output order.
    pub densities: Cow<'static, [f64]>,
    /// Whether the rotated viewport must also be served.
    #[cfg_attr(feature = "serde", serde(default))]
    pub can_rotate: bool,
}

impl Device {
    /// Create a non-rotating device.
    pub fn new(width: u32, height: u32, densities: impl Into<Cow<'static, [f64]>>) -> Self {
        Self {
            width,
            height,
            densities: densities.into(),
            can_rotate: false,
        }
    }

    /// Static catalog entry that never rotates (desktops, laptops).
    pub const fn fixed(width: u32, height: u32, densities: &'static [f64]) -> Self {
        Self {
            width,
            height,
            densities: Cow::Borrowed(densities),
            can_rotate: false,
        }
    }

    /// Static catalog entry that can rotate (phones, tablets).
    pub const fn handheld(width: u32, height: u32, densities: &'static [f64]) -> Self {
        Self {
            width,
            height,
            densities: Cow::Borrowed(densities),
            can_rotate: true,
        }
    }

    /// Allow rotation.
    pub fn rotatable(mut self) -> Self {
        self.can_rotate = true;
        self
    }

    /// The natural viewport.
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// A copy of this device turned 90°: width and height swapped.
    pub fn rotated(&self) -> Self {
        let Viewport { width, height } = self.viewport().rotated();
        Self {
            width,
            height,
            densities: self.densities.clone(),
            can_rotate: self.can_rotate,
        }
    }

    /// Viewports to test: natural first, then the rotated one if the
    /// device can rotate.
    pub fn viewports(&self) -> Vec<Viewport> {
        if self.can_rotate {
            alloc::vec![self.viewport(), self.rotated().viewport()]
        } else {
            alloc::vec![self.viewport()]
        }
    }
}

/// Default device catalog.
///
/// Common phone, tablet, laptop and desktop viewports. Phones and tablets are
/// listed in their natural (portrait) orientation and rotate; desktops don't.
pub static DEVICES: &[Device] = &[
    // Phones
    Device::handheld(320, 568, &[2.0]),
    Device::handheld(360, 640, &[2.0, 3.0]),
    Device::handheld(360, 780, &[3.0]),
    Device::handheld(375, 667, &[2.0]),
    Device::handheld(375, 812, &[3.0]),
    Device::handheld(390, 844, &[3.0]),
    Device::handheld(393, 873, &[2.75]),
    Device::handheld(412, 915, &[2.625, 3.5]),
    Device::handheld(414, 896, &[2.0, 3.0]),
    Device::handheld(428, 926, &[3.0]),
    Device::handheld(430, 932, &[3.0]),
    // Tablets
    Device::handheld(600, 960, &[2.0]),
    Device::handheld(768, 1024, &[1.0, 2.0]),
    Device::handheld(800, 1280, &[1.5, 2.0]),
    Device::handheld(810, 1080, &[2.0]),
    Device::handheld(820, 1180, &[2.0]),
    Device::handheld(834, 1194, &[2.0]),
    Device::handheld(1024, 1366, &[2.0]),
    // Laptops and desktops
    Device::fixed(1280, 800, &[1.0, 2.0]),
    Device::fixed(1366, 768, &[1.0]),
    Device::fixed(1440, 900, &[1.0, 2.0]),
    Device::fixed(1536, 864, &[1.25]),
    Device::fixed(1680, 1050, &[1.0, 2.0]),
    Device::fixed(1920, 1080, &[1.0, 1.5]),
    Device::fixed(2560, 1440, &[1.0, 2.0]),
    Device::fixed(3840, 2160, &[1.0]),
];
