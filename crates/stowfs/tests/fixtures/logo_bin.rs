// Code generated by stowfs for module `fixtures`. DO NOT EDIT.

use stowfs::File;

const _: () = assert!(
    stowfs::SCHEMA_VERSION == 1,
    "generated for stowfs schema version 1"
);

#[allow(non_upper_case_globals)]
pub static AssetLogoBin: File = File::file("/img/logo.bin", "logo.bin", 1700000500, 1024, r"
H4sIAAAAAAACA2NgZGJmYWVj5+Dk4ubh5eMXEBQSFhEVE5eQlJKWkZWTV1BUUlZRVVPX0NTS1tHV0zcw
NDI2MTUzt7C0sraxtbN3cHRydnF1c/fw9PL28fXzDwgMCg4JDQuPiIyKjomNi09ITEpOSU1Lz8jMys7J
zcsvKCwqLiktK6+orKquqa2rb2hsam5pbWvv6Ozq7unt658wcdLkKVOnTZ8xc9bsOXPnzV+wcNHiJUuX
LV+xctXqNWvXrd+wcdPmLVu3bd+xc9fuPXv37T9w8NDhI0ePHT9x8tTpM2fPnb9w8dLlK1evXb9x89bt
O3fv3X/w8NHjJ0+fPX/x8tXrN2/fvf/w8dPnL1+/ff/x89fvP3///WcY9f+o/0ew/wEmTAu3AAQAAA==
");
