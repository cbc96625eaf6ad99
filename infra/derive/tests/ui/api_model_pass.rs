use plist_derive::api_model;

#[api_model(deny_unknown_fields = false)]
pub struct Domain {
    pub domain: String,
    pub desktop_ads: u32,
}

#[api_model]
#[derive(Clone)]
pub struct Request {
    pub publisher_name: String,
}

fn main() {
    let _ = Domain { domain: "a.com".to_owned(), desktop_ads: 1 };
    let _ = Request { publisher_name: "A".to_owned() }.clone();
}
