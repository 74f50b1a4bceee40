mod utc_offset_test;
