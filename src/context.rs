/// Borrowed snapshot of the request fields the policy inspects.
///
/// Adapters are expected to treat an empty header value the same as an
/// absent one; `None` and `Some("")` are interchangeable here.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
}
