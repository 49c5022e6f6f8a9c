use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidCurrencyCode, "Invalid currency code: {code}.", { code: &str });
define_client_error!(
    InvalidAmountText,
    "Invalid amount text: '{value}'.",
    { value: &str }
);

// Formatting-related.
define_client_error!(
    InvalidAmount,
    "Amount ({amount}) is not a finite number and cannot be formatted.",
    { amount: f64 }
);

// Conversion-related.
define_client_error!(
    InvalidExchangeRate,
    "Invalid exchange rate ({rate}). Rate must be a finite number of VND per 1 USD greater than zero.",
    { rate: f64 }
);
