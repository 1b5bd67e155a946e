macro_rules! impl_module {
    ($name:ident) => {
        pub struct $name<C: $crate::client::Client> {
            client: std::sync::Arc<C>,
        }

        impl<C: $crate::client::Client> $name<C> {
            pub fn new(client: std::sync::Arc<C>) -> Self {
                Self { client }
            }
        }
    };
}

pub(super) use impl_module;
