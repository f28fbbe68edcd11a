mod get_msb;

pub(crate) use get_msb::Msb;
