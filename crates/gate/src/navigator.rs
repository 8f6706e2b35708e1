/// Client-side navigation, fire-and-forget.
///
/// The gate neither awaits nor verifies the navigation; it keeps rendering
/// nothing until it is unmounted.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}
