// In: src/kernels/cidr.rs

//! This module contains the pure, stateless kernel for CIDR membership tests.
//!
//! Parsing leans on `std::net::IpAddr` for address literals and the
//! `ipnetwork` crate for prefix notation, so both IPv4 and IPv6 textual
//! forms are accepted on either side. The only semantics added on top are
//! the address-family consistency check and its exact, consumer-visible
//! error phrasing.

use std::net::IpAddr;

use ipnetwork::IpNetwork;

use crate::error::{AddressFamily, UtilfnsError};

//==================================================================================
// 1. Core Logic
//==================================================================================

/// Classifies an IP by probing for a 4-byte normalization.
///
/// An IPv4-mapped IPv6 literal (`::ffff:a.b.c.d`) normalizes successfully
/// and therefore classifies as IPv4. That quirk is inherited behavior the
/// hosts rely on; see the unit tests before changing it.
fn family_of(ip: &IpAddr) -> AddressFamily {
    match ip {
        IpAddr::V4(_) => AddressFamily::V4,
        IpAddr::V6(v6) => {
            if v6.to_ipv4_mapped().is_some() {
                AddressFamily::V4
            } else {
                AddressFamily::V6
            }
        }
    }
}

/// Rewrites `ip` into the network's own family so that a mapped-IPv6
/// operand still participates in an IPv4 containment check (and vice
/// versa). Only called after the family check has passed.
fn align_to_network(network: &IpNetwork, ip: IpAddr) -> IpAddr {
    match (network, ip) {
        (IpNetwork::V4(_), IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        },
        (IpNetwork::V6(_), IpAddr::V4(v4)) => IpAddr::V6(v4.to_ipv6_mapped()),
        (_, other) => other,
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Returns whether `address` falls within the network denoted by `prefix`.
///
/// Argument order matches the declared host signature
/// `cidrcontains(prefix, address)`; errors are attributed accordingly
/// (prefix = 0, address = 1).
pub fn contains(prefix: &str, address: &str) -> Result<bool, UtilfnsError> {
    let ip: IpAddr = address.parse().map_err(|_| UtilfnsError::InvalidAddress)?;

    // A bare IP would parse as a full-length prefix, which is not CIDR
    // notation; the slash is mandatory.
    if !prefix.contains('/') {
        return Err(UtilfnsError::InvalidCidr(format!(
            "invalid CIDR address: {}",
            prefix
        )));
    }
    let network: IpNetwork = prefix
        .parse()
        .map_err(|e: ipnetwork::IpNetworkError| UtilfnsError::InvalidCidr(e.to_string()))?;

    let address_family = family_of(&ip);
    let cidr_family = family_of(&network.ip());
    if address_family != cidr_family {
        return Err(UtilfnsError::FamilyMismatch {
            address_family,
            cidr_family,
        });
    }

    Ok(network.contains(align_to_network(&network, ip)))
}
