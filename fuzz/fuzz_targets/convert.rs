#![no_main]

use coltype::{convert_with, output_dtype};
use coltype_error::ColtypeError;
use coltype_fuzz::FuzzConversion;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|conversion: FuzzConversion| {
    let FuzzConversion {
        schema,
        raw,
        options,
    } = conversion;

    match convert_with(&raw, &schema, &options) {
        Ok(output) => {
            assert_eq!(output.len(), raw.len(), "length changed for {schema}");
            assert_eq!(output.dtype(), output_dtype(&schema, &options));
        }
        Err(ColtypeError::SchemaMismatch(..) | ColtypeError::Decode(..)) => {}
        Err(err) => panic!("unexpected error converting {schema}: {err}"),
    }
});
