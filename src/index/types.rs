use serde::{Deserialize, Serialize};

/// First value of the global metadata band
pub const METADATA_BAND: u8 = 0;

/// First value of the per-field-type metadata band
pub const FIELD_META_BAND: u8 = 64;

/// First value of the per-field-type index band
pub const FIELD_INDEX_BAND: u8 = 128;

/// Field types a search index can hold.
///
/// The discriminant is the slot inside both field bands, so a field type's
/// metadata and index subkeys are always `FIELD_INDEX_BAND - FIELD_META_BAND`
/// apart. Slots 2..=63 are free for future types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FieldType {
    Tag = 1,
}

impl FieldType {
    pub const ALL: [FieldType; 1] = [FieldType::Tag];

    #[inline]
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// Discriminator byte for this field type's metadata records
    #[inline]
    pub const fn meta_subkey(self) -> u8 {
        FIELD_META_BAND + self.slot()
    }

    /// Discriminator byte for this field type's posting keys
    #[inline]
    pub const fn index_subkey(self) -> u8 {
        FIELD_INDEX_BAND + self.slot()
    }
}

/// Leading byte of every subkey stored under a search index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SubkeyType {
    /// Global: the set of key prefixes the index watches
    Prefixes = METADATA_BAND + 1,
    TagFieldMeta = FieldType::Tag.meta_subkey(),
    TagField = FieldType::Tag.index_subkey(),
}

impl SubkeyType {
    pub const ALL: [SubkeyType; 3] = [
        SubkeyType::Prefixes,
        SubkeyType::TagFieldMeta,
        SubkeyType::TagField,
    ];

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_byte() == byte)
    }

    /// Field type owning this subkey, or `None` for global metadata
    pub fn field_type(self) -> Option<FieldType> {
        match self {
            SubkeyType::Prefixes => None,
            SubkeyType::TagFieldMeta | SubkeyType::TagField => Some(FieldType::Tag),
        }
    }

    pub fn band(self) -> Band {
        Band::of(self.as_byte())
    }

    pub fn name(self) -> &'static str {
        match self {
            SubkeyType::Prefixes => "prefixes",
            SubkeyType::TagFieldMeta => "tag-field-meta",
            SubkeyType::TagField => "tag-field",
        }
    }
}

/// Range of discriminator values a subkey falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Metadata,
    FieldMeta,
    FieldIndex,
}

impl Band {
    pub fn of(byte: u8) -> Self {
        if byte >= FIELD_INDEX_BAND {
            Band::FieldIndex
        } else if byte >= FIELD_META_BAND {
            Band::FieldMeta
        } else {
            Band::Metadata
        }
    }
}
