use clap::{Parser, Subcommand};
use mailplatform::{DataFieldValue, FieldType, SearchType, SmsUnsubscribeType};

#[derive(Parser, Debug)]
#[command(name = "mpcli", version, about = "Mail platform API v2.0 CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Print API requests for debugging")]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your lists
    Lists {
        #[arg(long, default_value_t = 0)]
        listid: u64,
        #[arg(long, default_value_t = 100, help = "Page size")]
        limit: u32,
    },
    /// Create a list
    CreateList {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        sender_name: Option<String>,
        #[arg(long)]
        sender_email: Option<String>,
        #[arg(long)]
        reply_email: Option<String>,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        company_email: Option<String>,
        #[arg(long)]
        company_address: Option<String>,
        #[arg(long)]
        company_phone: Option<String>,
        #[arg(long)]
        company_domain: Option<String>,
    },
    /// Get opens by campaign statid
    Opens { statid: u64 },
    /// Get clicks by campaign statid
    Clicks {
        statid: u64,
        #[arg(long)]
        count_only: bool,
        #[arg(long)]
        unique_only: bool,
    },
    /// Send a newsletter immediately
    SendNow { newsletterid: u64 },
    /// Schedule a newsletter to a list
    ScheduleList {
        newsletterid: u64,
        listid: u64,
        #[arg(long, help = "Unix timestamp when to send")]
        send_time_ts: Option<i64>,
    },
    /// Add a profile to a list (email or mobile required)
    PfAdd {
        listid: u64,
        #[arg(long = "email")]
        email_address: Option<String>,
        #[arg(long = "mobile")]
        mobile_number: Option<String>,
        #[arg(long = "prefix", help = "Country dialing code, e.g. 45")]
        mobile_prefix: Option<String>,
        #[arg(long = "field", value_name = "FIELDID=VALUE", help = "Data field value, repeatable")]
        fields: Vec<DataFieldValue>,
        #[arg(long, help = "Create as unconfirmed (sends confirmation email)")]
        unconfirmed: bool,
        #[arg(long, help = "Create with mobile unsubscribed status")]
        sms_unsubscribed: bool,
        #[arg(long)]
        add_to_autoresponders: bool,
    },
    /// Update a profile's data fields
    PfUpdate {
        profileid: u64,
        #[arg(long = "field", value_name = "FIELDID=VALUE", required = true)]
        fields: Vec<DataFieldValue>,
    },
    /// List profiles on a list
    PfsByList {
        listid: u64,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// List profiles from a segment
    PfsFromSegment {
        segmentid: u64,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// List segments (optionally filter by list)
    Segments {
        #[arg(long, default_value_t = 0)]
        segmentid: u64,
        #[arg(long)]
        listid: Option<u64>,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Create a segment
    SegmentCreate {
        name: String,
        #[arg(long, help = "Rules JSON, e.g. {\"Segments\": [...]}")]
        rules_json: String,
        #[arg(long, default_value = mailplatform::clients::segments::DEFAULT_CONNECTOR)]
        connector: String,
    },
    /// Edit a segment
    SegmentEdit {
        segmentid: u64,
        name: String,
        #[arg(long)]
        rules_json: String,
        #[arg(long, default_value = mailplatform::clients::segments::DEFAULT_CONNECTOR)]
        connector: String,
    },
    /// Delete a segment
    SegmentDelete { segmentid: u64 },
    /// Load data fields (optionally one by id)
    DfLoad {
        #[arg(long)]
        fieldid: Option<u64>,
        #[arg(long)]
        load_lists: bool,
        #[arg(long, default_value_t = mailplatform::clients::data_fields::DEFAULT_DATA_FIELDS_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Create a data field
    DfCreate {
        name: String,
        #[arg(help = "One of: text, textarea, number, dropdown, checkbox, radiobutton, date")]
        field_type: FieldType,
        #[arg(long = "default")]
        default_value: Option<String>,
        #[arg(long, help = "JSON settings per API docs")]
        settings_json: Option<String>,
    },
    /// Update a data field (by id or name)
    DfUpdate {
        #[arg(long)]
        fieldid: Option<u64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "default")]
        default_value: Option<String>,
        #[arg(long, help = "JSON settings per API docs")]
        settings_json: Option<String>,
    },
    /// Delete a data field by id
    DfDelete { fieldid: u64 },
    /// Link data fields to a list
    ListAddFields {
        listid: u64,
        #[arg(required = true, num_args = 1..)]
        field_ids: Vec<u64>,
    },
    /// Unlink data fields from a list
    ListRemoveFields {
        listid: u64,
        #[arg(required = true, num_args = 1..)]
        field_ids: Vec<u64>,
    },
    /// Get data fields of a list
    ListGetFields {
        listid: u64,
        #[arg(long)]
        field_type: Option<FieldType>,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Load a profile's data fields
    ProfileFields {
        #[arg(long)]
        profileid: Option<u64>,
        #[arg(long)]
        listid: Option<u64>,
        #[arg(long = "email")]
        email_address: Option<String>,
        #[arg(long = "mobile")]
        mobile_number: Option<String>,
        #[arg(long = "prefix")]
        mobile_prefix: Option<String>,
    },
    /// Fetch unsubscribes for a list (optionally filtered by date)
    UnsubsByList {
        listid: u64,
        #[command(flatten)]
        search: UnsubscribeArgs,
    },
    /// Fetch unsubscribed profiles (globally or for one list)
    UnsubsProfs {
        #[arg(long, help = "Limit to a specific list ID")]
        listid: Option<u64>,
        #[command(flatten)]
        search: UnsubscribeArgs,
    },
    /// Fetch profiles on a list that unsubscribed from SMS
    SmsUnsubsProfs {
        listid: u64,
        #[arg(help = "Date/timestamp, e.g. \"2024-06-01\" or 1717200000")]
        date: String,
        #[arg(long = "type", default_value = "on", help = "One of: on, before, after")]
        kind: SmsUnsubscribeType,
        #[arg(long, default_value_t = 100, help = "Max 1000")]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
}

/// Date filter shared by the unsubscribe reports.
#[derive(clap::Args, Debug)]
pub struct UnsubscribeArgs {
    #[arg(long)]
    pub count_only: bool,
    #[arg(long, help = "One of: before, after, between, not, exact, exactly")]
    pub search_type: Option<SearchType>,
    #[arg(long = "start", help = "Start date/timestamp (e.g. 1578618000 or 2020-01-10)")]
    pub search_start_date: Option<String>,
    #[arg(long = "end", help = "End date/timestamp (required when --search-type=between)")]
    pub search_end_date: Option<String>,
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["mpcli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments parse").command
    }

    #[test]
    fn test_command_tree_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_fields() {
        let Commands::PfAdd { listid, fields, unconfirmed, .. } =
            parse(&["pf-add", "12", "--email", "a@b.test", "--field", "1=x", "--field", "2=y=z"])
        else {
            panic!("expected pf-add");
        };

        assert_eq!(listid, 12);
        assert!(!unconfirmed);
        assert_eq!(
            fields,
            vec![DataFieldValue::new("1", "x"), DataFieldValue::new("2", "y=z")]
        );
    }

    #[test]
    fn test_sms_type_defaults_to_on() {
        let Commands::SmsUnsubsProfs { kind, limit, .. } =
            parse(&["sms-unsubs-profs", "3", "2024-06-01"])
        else {
            panic!("expected sms-unsubs-profs");
        };

        assert_eq!(kind, SmsUnsubscribeType::On);
        assert_eq!(limit, 100);
    }

    #[test]
    fn test_invalid_enum_is_rejected() {
        assert!(Cli::try_parse_from(["mpcli", "sms-unsubs-profs", "3", "x", "--type", "during"]).is_err());
        assert!(Cli::try_parse_from(["mpcli", "df-create", "Age", "integer"]).is_err());
        assert!(Cli::try_parse_from(["mpcli", "pf-update", "5", "--field", "novalue"]).is_err());
    }

    #[test]
    fn test_unsubscribe_filter_flags() {
        let Commands::UnsubsByList { listid, search } = parse(&[
            "unsubs-by-list",
            "4",
            "--search-type",
            "between",
            "--start",
            "2020-01-10",
            "--end",
            "2020-02-10",
        ]) else {
            panic!("expected unsubs-by-list");
        };

        assert_eq!(listid, 4);
        assert_eq!(search.search_type, Some(SearchType::Between));
        assert_eq!(search.search_end_date.as_deref(), Some("2020-02-10"));
        assert!(!search.count_only);
    }

    #[test]
    fn test_list_field_ids_require_one() {
        assert!(Cli::try_parse_from(["mpcli", "list-add-fields", "4"]).is_err());
    }
}
