//! Field access generation.

/// Generates [`Resource::read_field`](crate::resource::Resource::read_field)
/// and [`Resource::write_field`](crate::resource::Resource::write_field) for
/// the listed struct fields. Each field goes through `serde`, so any
/// `Serialize + DeserializeOwned` type works; `Option<_>` fields map to `null`.
///
/// Use inside an `impl Resource for ...` block.
#[macro_export]
macro_rules! resource_fields {
    ($($field:ident),+ $(,)?) => {
        fn read_field(&self, field: &str) -> ::std::option::Option<$crate::__private::Value> {
            match field {
                $(stringify!($field) => $crate::__private::to_value(&self.$field).ok(),)+
                _ => ::std::option::Option::None,
            }
        }

        fn write_field(
            &mut self,
            field: &str,
            value: $crate::__private::Value,
        ) -> $crate::framework::Result<bool> {
            match field {
                $(stringify!($field) => {
                    self.$field = $crate::__private::from_value(value)
                        .map_err(|e| $crate::framework::ResourceError::field(field, e.to_string()))?;
                    ::std::result::Result::Ok(true)
                })+
                _ => ::std::result::Result::Ok(false),
            }
        }
    };
}
