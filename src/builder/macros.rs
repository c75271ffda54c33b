//! Macros for literal schemas and payloads.

/// Build a [`Schema`](crate::core::Schema) from `name => Kind` pairs.
///
/// # Example
///
/// ```
/// use tabular_fsm::core::ValueKind;
/// use tabular_fsm::schema;
///
/// let schema = schema! {
///     "count" => Integer,
///     "label" => Text,
/// };
/// assert_eq!(schema.kind_of("count"), Some(ValueKind::Integer));
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::core::Schema::new()
    };
    ($($name:expr => $kind:ident),+ $(,)?) => {
        $crate::core::Schema::new()
            $(.variable($name, $crate::core::ValueKind::$kind))+
    };
}

/// Build a [`Payload`](crate::core::Payload) from `name => value` pairs.
///
/// # Example
///
/// ```
/// use tabular_fsm::core::Value;
/// use tabular_fsm::payload;
///
/// let payload = payload! { "count" => 0, "label" => "idle" };
/// assert_eq!(payload.get("label"), Some(&Value::from("idle")));
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::core::Payload::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::core::Payload::new()
            $(.with($name, $value))+
    };
}
