// SPDX-License-Identifier: MIT OR Apache-2.0

// Each constant is named after the tail of its canonical name.
#![allow(missing_docs)]

tpm_enum! {
    /// Algorithm identifiers (`TPM_ALG_ID`).
    ///
    /// These values are defined in the [TCG Algorithm Registry]. The
    /// `TPM2_ALG_SHA` alias is not included, since it shares its value with
    /// [`Algorithm::SHA1`].
    ///
    /// [TCG Algorithm Registry]: https://trustedcomputinggroup.org/resource/tcg-algorithm-registry/
    pub enum Algorithm => "TPM2_ALG_", "ALGORITHM" {
        ERROR = 0x0000,
        RSA = 0x0001,
        TDES = 0x0003,
        SHA1 = 0x0004,
        HMAC = 0x0005,
        AES = 0x0006,
        MGF1 = 0x0007,
        KEYEDHASH = 0x0008,
        XOR = 0x000a,
        SHA256 = 0x000b,
        SHA384 = 0x000c,
        SHA512 = 0x000d,
        NULL = 0x0010,
        SM3_256 = 0x0012,
        SM4 = 0x0013,
        RSASSA = 0x0014,
        RSAES = 0x0015,
        RSAPSS = 0x0016,
        OAEP = 0x0017,
        ECDSA = 0x0018,
        ECDH = 0x0019,
        ECDAA = 0x001a,
        SM2 = 0x001b,
        ECSCHNORR = 0x001c,
        ECMQV = 0x001d,
        KDF1_SP800_56A = 0x0020,
        KDF2 = 0x0021,
        KDF1_SP800_108 = 0x0022,
        ECC = 0x0023,
        SYMCIPHER = 0x0025,
        CAMELLIA = 0x0026,
        SHA3_256 = 0x0027,
        SHA3_384 = 0x0028,
        SHA3_512 = 0x0029,
        CMAC = 0x003f,
        CTR = 0x0040,
        OFB = 0x0041,
        CBC = 0x0042,
        CFB = 0x0043,
        ECB = 0x0044,
    }
}

tpm_enum! {
    /// Algorithm attributes (`TPMA_ALGORITHM`).
    ///
    /// Each constant is a single flag. See [`AlgorithmAttributes`] for
    /// combinations of them.
    ///
    /// Defined in TPM 2.0 Library, Part 2: Structures, "TPMA_ALGORITHM".
    ///
    /// [`AlgorithmAttributes`]: crate::AlgorithmAttributes
    pub enum AlgorithmAttribute => "TPMA_ALGORITHM_", "ALGORITHM ATTRIBUTE" {
        ASYMMETRIC = 0x0000_0001,
        SYMMETRIC = 0x0000_0002,
        HASH = 0x0000_0004,
        OBJECT = 0x0000_0008,
        SIGNING = 0x0000_0100,
        ENCRYPTING = 0x0000_0200,
        METHOD = 0x0000_0400,
    }
}

tpm_enum! {
    /// Capability selectors (`TPM_CAP`), used with `TPM2_GetCapability`.
    ///
    /// Defined in TPM 2.0 Library, Part 2: Structures, "TPM_CAP". The
    /// `TPM2_CAP_FIRST` and `TPM2_CAP_LAST` aliases are not included.
    pub enum Capability => "TPM2_CAP_", "CAPABILITY" {
        ALGS = 0x0000_0000,
        HANDLES = 0x0000_0001,
        COMMANDS = 0x0000_0002,
        PP_COMMANDS = 0x0000_0003,
        AUDIT_COMMANDS = 0x0000_0004,
        PCRS = 0x0000_0005,
        TPM_PROPERTIES = 0x0000_0006,
        PCR_PROPERTIES = 0x0000_0007,
        ECC_CURVES = 0x0000_0008,
        AUTH_POLICIES = 0x0000_0009,
        ACT = 0x0000_000a,
        VENDOR_PROPERTY = 0x0000_0100,
    }
}

tpm_enum! {
    /// Object attributes (`TPMA_OBJECT`).
    ///
    /// Each constant is a single flag. See [`ObjectAttributes`] for
    /// combinations of them.
    ///
    /// Defined in TPM 2.0 Library, Part 2: Structures, "TPMA_OBJECT".
    ///
    /// [`ObjectAttributes`]: crate::ObjectAttributes
    pub enum ObjectAttribute => "TPMA_OBJECT_", "OBJECT ATTRIBUTE" {
        FIXEDTPM = 0x0000_0002,
        STCLEAR = 0x0000_0004,
        FIXEDPARENT = 0x0000_0010,
        SENSITIVEDATAORIGIN = 0x0000_0020,
        USERWITHAUTH = 0x0000_0040,
        ADMINWITHPOLICY = 0x0000_0080,
        NODA = 0x0000_0400,
        ENCRYPTEDDUPLICATION = 0x0000_0800,
        RESTRICTED = 0x0001_0000,
        DECRYPT = 0x0002_0000,
        SIGN_ENCRYPT = 0x0004_0000,
        X509SIGN = 0x0008_0000,
    }
}
