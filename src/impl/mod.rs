// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_text_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod currency_mode;
        pub(crate) mod exchange_rate;
        pub(crate) mod formatter_config;
        pub(crate) mod locale_profile;
    }
    pub(crate) mod logic {
        pub(crate) mod conversion;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod compact_amount_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::currency_mode::*;
        pub use crate::domain::entities::exchange_rate::*;
        pub use crate::domain::entities::formatter_config::*;
        pub use crate::domain::entities::locale_profile::*;
    }
}
