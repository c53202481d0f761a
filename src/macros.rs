//! This module contains the macros used in the project.

/// prompt for a missing config value and save it back to the config file
macro_rules! config_value {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {{
        println!(concat!("Please enter ", $string, ":"));
        let value = $crate::utils::input()?;
        let cloned_value = value.clone();
        $config.update(|config_data| {
            if let Some(local_config) = config_data.$setting_name.as_mut() {
                local_config.$key_name = Some(cloned_value);
            } else {
                config_data.$setting_name = Some($struct_name {
                    $key_name: Some(cloned_value),
                    ..Default::default()
                });
            }
        })?;
        value
    }};
}

/// read a config value, prompting for it if missing
macro_rules! config_value_wrap {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {
        match &$config.config_data.$setting_name {
            Some(c) => match &c.$key_name {
                Some(u) => u.clone(),
                None => {
                    $crate::config_value!($config, $setting_name, $struct_name, $key_name, $string)
                }
            },
            None => $crate::config_value!($config, $setting_name, $struct_name, $key_name, $string),
        }
    };
}

/// read a secret config value, prompting without echo if missing
/// prompted secrets are not written back to the config file
macro_rules! config_password_wrap {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {
        match &$config.config_data.$setting_name {
            Some($struct_name {
                $key_name: Some(value),
                ..
            }) => value.clone(),
            _ => {
                println!(concat!("Please enter ", $string, ":"));
                $crate::utils::get_password()?
            }
        }
    };
}

pub(crate) use config_password_wrap;
pub(crate) use config_value;
pub(crate) use config_value_wrap;
