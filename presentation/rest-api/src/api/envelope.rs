/// Declares a success envelope `{success: true, data, message?}` around a
/// concrete payload type.
macro_rules! envelope {
    ($(#[$meta:meta])* $name:ident, $data:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, poem_openapi::Object)]
        pub struct $name {
            /// Always `true`
            pub success: bool,
            pub data: $data,
            /// Outcome of a mutation
            #[oai(skip_serializing_if_is_none)]
            pub message: Option<String>,
        }

        impl $name {
            pub fn new(data: $data, message: Option<&str>) -> Self {
                Self {
                    success: true,
                    data,
                    message: message.map(str::to_string),
                }
            }
        }
    };
}

pub(crate) use envelope;
