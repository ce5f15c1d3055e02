use mailplatform::{
    DataFieldUpdate, MailPlatformClient, NewDataField, NewList, NewProfile, ProfileLookup,
    UnsubscribeFilter,
};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Commands, UnsubscribeArgs};
use crate::error::CliError;

/// Run one subcommand and return the API response to print.
pub async fn execute(client: &MailPlatformClient, command: Commands) -> Result<Value, CliError> {
    debug!(?command, "Executing command");

    let out = match command {
        Commands::Lists { listid, limit } => {
            let lists = client.lists().iter(listid, limit)?.collect_all().await?;
            Value::Array(lists)
        }
        Commands::CreateList {
            name,
            description,
            sender_name,
            sender_email,
            reply_email,
            company_name,
            company_email,
            company_address,
            company_phone,
            company_domain,
        } => {
            let list = NewList {
                name,
                description,
                sender_name,
                sender_email,
                reply_email,
                company_name,
                company_email,
                company_address,
                company_phone,
                company_domain,
            };
            client.lists().create(&list).await?
        }

        Commands::Opens { statid } => client.stats().get_opens(statid).await?,
        Commands::Clicks {
            statid,
            count_only,
            unique_only,
        } => client.stats().get_clicks(statid, count_only, unique_only).await?,

        Commands::SendNow { newsletterid } => client.send().send_newsletter(newsletterid).await?,
        Commands::ScheduleList {
            newsletterid,
            listid,
            send_time_ts,
        } => {
            client
                .send()
                .schedule_to_list(newsletterid, listid, send_time_ts)
                .await?
        }

        Commands::PfAdd {
            listid,
            email_address,
            mobile_number,
            mobile_prefix,
            fields,
            unconfirmed,
            sms_unsubscribed,
            add_to_autoresponders,
        } => {
            let profile = NewProfile {
                email_address,
                mobile_number,
                mobile_prefix,
                data_fields: fields,
                confirmed: !unconfirmed,
                mobile_confirmed: !sms_unsubscribed,
                add_to_autoresponders,
                ..NewProfile::empty(listid)
            };
            client.profiles().add_to_list(&profile).await?
        }
        Commands::PfUpdate { profileid, fields } => {
            client.profiles().update(profileid, &fields).await?
        }
        Commands::PfsByList {
            listid,
            limit,
            offset,
        } => client.profiles().get_by_list(listid, limit, offset).await?,
        Commands::PfsFromSegment {
            segmentid,
            limit,
            offset,
        } => {
            client
                .profiles()
                .get_from_segment(segmentid, limit, offset)
                .await?
        }

        Commands::Segments {
            segmentid,
            listid,
            limit,
            offset,
        } => client.segments().get(segmentid, listid, limit, offset).await?,
        Commands::SegmentCreate {
            name,
            rules_json,
            connector,
        } => {
            let rules = parse_json(&rules_json, "--rules-json")?;
            client.segments().create(&name, &rules, &connector).await?
        }
        Commands::SegmentEdit {
            segmentid,
            name,
            rules_json,
            connector,
        } => {
            let rules = parse_json(&rules_json, "--rules-json")?;
            client
                .segments()
                .edit(segmentid, &name, &rules, &connector)
                .await?
        }
        Commands::SegmentDelete { segmentid } => client.segments().delete(segmentid).await?,

        Commands::DfLoad {
            fieldid,
            load_lists,
            limit,
            offset,
        } => {
            client
                .data_fields()
                .load(fieldid, load_lists, limit, offset)
                .await?
        }
        Commands::DfCreate {
            name,
            field_type,
            default_value,
            settings_json,
        } => {
            let field = NewDataField {
                default_value,
                settings: parse_optional_json(settings_json.as_deref(), "--settings-json")?,
                ..NewDataField::new(name, field_type)
            };
            client.data_fields().create(&field).await?
        }
        Commands::DfUpdate {
            fieldid,
            name,
            default_value,
            settings_json,
        } => {
            let update = DataFieldUpdate {
                fieldid,
                name,
                default_value,
                settings: parse_optional_json(settings_json.as_deref(), "--settings-json")?,
            };
            client.data_fields().update(&update).await?
        }
        Commands::DfDelete { fieldid } => client.data_fields().delete(fieldid).await?,

        Commands::ListAddFields { listid, field_ids } => {
            client.lists().add_data_fields(listid, &field_ids).await?
        }
        Commands::ListRemoveFields { listid, field_ids } => {
            client.lists().remove_data_fields(listid, &field_ids).await?
        }
        Commands::ListGetFields {
            listid,
            field_type,
            limit,
            offset,
        } => {
            client
                .lists()
                .get_data_fields(listid, field_type, limit, offset)
                .await?
        }

        Commands::ProfileFields {
            profileid,
            listid,
            email_address,
            mobile_number,
            mobile_prefix,
        } => {
            let lookup = ProfileLookup {
                profileid,
                listid,
                email_address,
                mobile_number,
                mobile_prefix,
            };
            client.profiles().load_data_fields(&lookup).await?
        }

        Commands::UnsubsByList { listid, search } => {
            client
                .stats()
                .get_unsubscribes_by_list(listid, &unsubscribe_filter(search))
                .await?
        }
        Commands::UnsubsProfs { listid, search } => {
            client
                .profiles()
                .get_unsubscribed(listid, &unsubscribe_filter(search))
                .await?
        }
        Commands::SmsUnsubsProfs {
            listid,
            date,
            kind,
            limit,
            offset,
        } => {
            client
                .profiles()
                .get_sms_unsubscribed(listid, &date, kind, limit, offset)
                .await?
        }
    };

    Ok(out)
}

fn unsubscribe_filter(args: UnsubscribeArgs) -> UnsubscribeFilter {
    UnsubscribeFilter {
        count_only: args.count_only,
        search_type: args.search_type,
        search_start_date: args.search_start_date,
        search_end_date: args.search_end_date,
        limit: args.limit,
        offset: args.offset,
    }
}

fn parse_json(raw: &str, flag: &'static str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(CliError::invalid_json(flag))
}

fn parse_optional_json(raw: Option<&str>, flag: &'static str) -> Result<Option<Value>, CliError> {
    raw.map(|raw| parse_json(raw, flag)).transpose()
}
