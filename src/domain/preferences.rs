use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Normal,
    #[default]
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

/// Persisted accessibility preferences. Fields missing from a stored record
/// take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    pub text_size: TextSize,
    pub voice_enabled: bool,
    pub color_mode: ColorMode,
    pub dark_mode: bool,
    pub haptic_feedback: bool,
    pub sound_effects: bool,
    pub guided_mode: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            text_size: TextSize::Large,
            voice_enabled: true,
            color_mode: ColorMode::Normal,
            dark_mode: false,
            haptic_feedback: true,
            sound_effects: true,
            guided_mode: false,
        }
    }
}

/// Partial update for [`AccessibilitySettings`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct AccessibilityPatch {
    pub text_size: Option<TextSize>,
    pub voice_enabled: Option<bool>,
    pub color_mode: Option<ColorMode>,
    pub dark_mode: Option<bool>,
    pub haptic_feedback: Option<bool>,
    pub sound_effects: Option<bool>,
    pub guided_mode: Option<bool>,
}

impl AccessibilitySettings {
    pub fn apply(&mut self, patch: AccessibilityPatch) {
        if let Some(v) = patch.text_size {
            self.text_size = v;
        }
        if let Some(v) = patch.voice_enabled {
            self.voice_enabled = v;
        }
        if let Some(v) = patch.color_mode {
            self.color_mode = v;
        }
        if let Some(v) = patch.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = patch.haptic_feedback {
            self.haptic_feedback = v;
        }
        if let Some(v) = patch.sound_effects {
            self.sound_effects = v;
        }
        if let Some(v) = patch.guided_mode {
            self.guided_mode = v;
        }
    }
}

/// The signed-up shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Payload for updating the profile.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct UserProfilePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Names of the fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("name", &self.name), ("phone", &self.phone), ("address", &self.address)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn apply(&mut self, patch: UserProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}
